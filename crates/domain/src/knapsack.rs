/// A candidate for a 0/1 knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub weight: u32,
    pub value: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Indices into the candidate slice, in ascending order.
    pub indices: Vec<usize>,
    pub weight: u32,
    pub value: u32,
}

/// Select the subset of candidates with the highest total value whose total
/// weight does not exceed `capacity`.
///
/// Ties are resolved deterministically:
///
///  - A candidate only replaces the selection at a capacity level if it
///    strictly increases the value, so earlier candidates win.
///  - Among all capacity levels reaching the maximum value, the smallest one
///    is chosen.
///
/// Candidates heavier than `capacity` are never selected. The capacity is
/// bounded by the total weight of the candidates that fit, so the tables
/// take O(n × min(capacity, Σ weight)) time and space.
#[must_use]
pub fn solve(candidates: &[Candidate], capacity: u32) -> Selection {
    let reachable: u64 = candidates
        .iter()
        .map(|c| u64::from(c.weight))
        .filter(|w| *w <= u64::from(capacity))
        .sum();
    let capacity = usize::try_from(reachable.min(u64::from(capacity))).unwrap_or(usize::MAX);
    let mut best = vec![0_u32; capacity + 1];
    let mut picks = vec![vec![false; candidates.len()]; capacity + 1];

    for (i, candidate) in candidates.iter().enumerate() {
        let weight = candidate.weight as usize;
        if weight > capacity {
            continue;
        }
        for c in (weight..=capacity).rev() {
            let value = best[c - weight] + candidate.value;
            if value > best[c] {
                best[c] = value;
                let mut pick = picks[c - weight].clone();
                pick[i] = true;
                picks[c] = pick;
            }
        }
    }

    let mut best_capacity = 0;
    for (c, value) in best.iter().enumerate() {
        if *value > best[best_capacity] {
            best_capacity = c;
        }
    }

    let indices = picks[best_capacity]
        .iter()
        .enumerate()
        .filter_map(|(i, picked)| picked.then_some(i))
        .collect::<Vec<_>>();

    Selection {
        weight: indices.iter().map(|i| candidates[*i].weight).sum(),
        value: best[best_capacity],
        indices,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn candidates(items: &[(u32, u32)]) -> Vec<Candidate> {
        items
            .iter()
            .map(|(weight, value)| Candidate {
                weight: *weight,
                value: *value,
            })
            .collect()
    }

    fn brute_force(candidates: &[Candidate], capacity: u32) -> u32 {
        (0_u32..1 << candidates.len())
            .filter_map(|mask| {
                let (weight, value) = candidates
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .fold((0, 0), |(w, v), (_, c)| (w + c.weight, v + c.value));
                (weight <= capacity).then_some(value)
            })
            .max()
            .unwrap_or(0)
    }

    #[rstest]
    #[case::empty(&[], 10, &[], 0)]
    #[case::zero_capacity(&[(1, 5)], 0, &[], 0)]
    #[case::single_fits(&[(16, 4)], 20, &[0], 4)]
    #[case::single_too_heavy(&[(16, 4)], 10, &[], 0)]
    #[case::exact_fit(&[(10, 3), (10, 4)], 20, &[0, 1], 7)]
    #[case::prefer_combination(&[(12, 6), (8, 4), (8, 4)], 16, &[1, 2], 8)]
    #[case::partial_capacity(&[(12, 5), (12, 5)], 20, &[0], 5)]
    #[case::zero_value_ignored(&[(4, 0), (4, 2)], 8, &[1], 2)]
    #[case::earlier_wins_tie(&[(8, 4), (8, 4)], 10, &[0], 4)]
    #[case::smallest_capacity_wins_tie(&[(12, 4), (8, 4)], 12, &[1], 4)]
    #[case::huge_capacity(&[(12, 3), (16, 4), (8, 0)], u32::MAX, &[0, 1], 7)]
    fn test_solve(
        #[case] items: &[(u32, u32)],
        #[case] capacity: u32,
        #[case] indices: &[usize],
        #[case] value: u32,
    ) {
        let selection = solve(&candidates(items), capacity);
        assert_eq!(selection.indices, indices);
        assert_eq!(selection.value, value);
    }

    #[test]
    fn test_solve_weight_of_selection() {
        let selection = solve(&candidates(&[(12, 6), (8, 4), (8, 4)]), 16);
        assert_eq!(selection.weight, 16);
    }

    #[test]
    fn test_solve_matches_brute_force() {
        // Deterministic pseudo-random instances with n <= 12.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = |bound: u64| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            u32::try_from(state % bound).unwrap()
        };

        for _ in 0..200 {
            let n = next(13) as usize;
            let items = (0..n)
                .map(|_| Candidate {
                    weight: next(30),
                    value: next(20),
                })
                .collect::<Vec<_>>();
            let capacity = next(80);

            let selection = solve(&items, capacity);
            let weight = selection.indices.iter().map(|i| items[*i].weight).sum::<u32>();
            let value = selection.indices.iter().map(|i| items[*i].value).sum::<u32>();

            assert!(weight <= capacity);
            assert_eq!(weight, selection.weight);
            assert_eq!(value, selection.value);
            assert_eq!(value, brute_force(&items, capacity));
        }
    }
}
