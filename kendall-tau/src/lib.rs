/// Calculate the Kendall tau distance between two slices.
/// The Kendall tau distance counts the pairs of positions `i < j` whose relative order is
/// strictly opposite in the two rankings, see the [Wikipedia article](https://en.wikipedia.org/wiki/Kendall_tau_distance).
/// Pairs that are tied in either slice are not counted as discordant.
pub fn kendall_tau<T, K>(x: &[T], y: &[K]) -> usize
where
    T: Ord,
    K: Ord,
{
    assert_eq!(x.len(), y.len(), "Input slices must have the same length");
    let mut distance = 0;

    for i in 0..x.len() {
        for j in i + 1..x.len() {
            let a = x[i].cmp(&x[j]);
            let b = y[i].cmp(&y[j]);

            if a.is_ne() && a == b.reverse() {
                distance += 1;
            }
        }
    }

    distance
}

/// The largest Kendall tau distance between two rankings of `len` items, `len * (len - 1) / 2`.
/// It is reached exactly when one ranking is the reverse of the other.
pub fn max_distance(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

/// Calculate the normalised Kendall tau distance between two slices.
/// The normalised Kendall tau distance is the Kendall tau distance divided by the maximum possible distance.
/// For slices of fewer than two elements the maximum is zero and the result is NaN.
pub fn normalised_kendall_tau<T, K>(x: &[T], y: &[K]) -> f64
where
    T: Ord,
    K: Ord,
{
    let kt = kendall_tau(x, y) as f64;
    kt / max_distance(x.len()) as f64
}

/// Returns true if `ranks` holds every value of `0..ranks.len()` exactly once.
pub fn is_permutation(ranks: &[usize]) -> bool {
    let mut seen = vec![false; ranks.len()];
    for &rank in ranks {
        match seen.get_mut(rank) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wikipedia_test() {
        // Values taken from https://en.wikipedia.org/wiki/Kendall_tau_distance (2024-06-22)
        let x = vec![1, 2, 3, 4, 5];
        let y = vec![3, 4, 1, 2, 5];
        assert_eq!(kendall_tau(&x, &y), 4);
        assert_eq!(normalised_kendall_tau(&x, &y), 0.4);
    }

    #[test]
    fn identical_rankings_have_zero_distance() {
        let x = [2, 0, 3, 1];
        assert_eq!(kendall_tau(&x, &x), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let x = [0, 3, 1, 4, 2];
        let y = [4, 1, 0, 2, 3];
        assert_eq!(kendall_tau(&x, &y), kendall_tau(&y, &x));
    }

    #[test]
    fn reversed_ranking_is_at_maximum_distance() {
        let x = [0, 1, 2];
        let y = [2, 1, 0];
        assert_eq!(kendall_tau(&x, &y), 3);
        assert_eq!(max_distance(3), 3);

        let x = [3, 0, 4, 1, 2];
        let z: Vec<_> = x.iter().map(|r| 4 - r).collect();
        // Complementing the ranks inverts every pair.
        assert_eq!(kendall_tau(&x, &z), max_distance(5));
    }

    #[test]
    fn reversed_positions_of_unsorted_ranking_are_not_maximal() {
        let x = [3, 0, 4, 1, 2];
        let y: Vec<_> = x.iter().rev().copied().collect();
        assert_eq!(kendall_tau(&x, &y), 2);
        assert!(kendall_tau(&x, &y) < max_distance(5));
    }

    #[test]
    fn ties_are_not_discordant() {
        let x = [0, 0, 1];
        let y = [1, 0, 2];
        assert_eq!(kendall_tau(&x, &y), 0);
    }

    #[test]
    fn max_distance_of_trivial_lengths() {
        assert_eq!(max_distance(0), 0);
        assert_eq!(max_distance(1), 0);
        assert_eq!(max_distance(2), 1);
        assert_eq!(max_distance(10), 45);
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }

    #[test]
    #[should_panic(expected = "Input slices must have the same length")]
    fn mismatched_lengths_panic() {
        kendall_tau(&[0, 1], &[0, 1, 2]);
    }
}
