#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    /// The ranking length is too small for the operation. Holds the offending length.
    InvalidDimension(usize),
    /// A ranking or buffer does not have the length the operation expects.
    DimensionMismatch { expected: usize, found: usize },
    /// The reference dataset is empty.
    InvalidDataset,
    ResourceExceeded(ResourceLimit),
}

impl std::fmt::Display for DepthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthError::InvalidDimension(dimension) => {
                write!(f, "Invalid ranking dimension {}", dimension)
            }
            DepthError::DimensionMismatch { expected, found } => {
                write!(f, "Expected length {}, found {}", expected, found)
            }
            DepthError::InvalidDataset => write!(f, "Reference dataset is empty"),
            DepthError::ResourceExceeded(limit) => write!(f, "Resource exceeded: {}", limit),
        }
    }
}

impl std::error::Error for DepthError {}

/// The enumeration budget limit that a request would break.
/// `requested` is `None` when computing the requirement itself overflowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLimit {
    Dimension { requested: usize, limit: usize },
    Permutations { requested: Option<u64>, limit: u64 },
    HistogramBuckets { requested: Option<usize>, limit: usize },
    PairComparisons { requested: Option<u64>, limit: u64 },
}

impl std::fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn amount<T: std::fmt::Display>(requested: &Option<T>) -> String {
            match requested {
                Some(requested) => requested.to_string(),
                None => "overflow".to_string(),
            }
        }

        match self {
            ResourceLimit::Dimension { requested, limit } => {
                write!(f, "dimension {} over limit {}", requested, limit)
            }
            ResourceLimit::Permutations { requested, limit } => {
                write!(f, "{} permutations over limit {}", amount(requested), limit)
            }
            ResourceLimit::HistogramBuckets { requested, limit } => {
                write!(f, "{} histogram buckets over limit {}", amount(requested), limit)
            }
            ResourceLimit::PairComparisons { requested, limit } => {
                write!(f, "{} pair comparisons over limit {}", amount(requested), limit)
            }
        }
    }
}

impl From<ResourceLimit> for DepthError {
    fn from(val: ResourceLimit) -> Self {
        DepthError::ResourceExceeded(val)
    }
}
