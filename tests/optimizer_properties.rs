//! Property-based tests for the winning-subset search.

use proptest::prelude::*;

use min_pop_vote::core::optimizer::{
    required_electoral_votes, solve, solve_exhaustive, total_electoral_votes,
};
use min_pop_vote::domain::model::flip_cost;
use min_pop_vote::Unit;

/// Strategy: up to 12 units with small vote counts, so the exhaustive search stays quick.
fn units_strategy() -> impl Strategy<Value = Vec<Unit>> {
    prop::collection::vec((0u32..=12, 0u64..=5_000), 0..=12).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (electoral_votes, popular_votes))| {
                Unit::new(format!("unit{i}"), format!("U{i}"), electoral_votes, popular_votes)
            })
            .collect()
    })
}

/// Cheapest feasible cost by brute force over every subset mask.
fn cheapest_winning_cost(units: &[Unit]) -> Option<u64> {
    let required = required_electoral_votes(total_electoral_votes(units));
    (0u32..(1 << units.len()))
        .filter_map(|mask| {
            let chosen = units
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, unit)| unit);
            let (votes, cost) = chosen.fold((0u64, 0u64), |(votes, cost), unit| {
                (votes + u64::from(unit.electoral_votes), cost + unit.flip_cost())
            });
            (votes >= required).then_some(cost)
        })
        .min()
}

proptest! {
    // 1. Memoization never changes the answer
    #[test]
    fn memoized_matches_exhaustive(units in units_strategy()) {
        prop_assert_eq!(solve(&units), solve_exhaustive(&units));
    }

    // 2. Reported cost is the sum of the chosen units' flip costs
    #[test]
    fn cost_is_sum_of_flip_costs(units in units_strategy()) {
        let result = solve(&units);
        let expected: u64 = result.chosen_units.iter().map(|u| flip_cost(u.popular_votes)).sum();
        prop_assert_eq!(result.cost, expected);
    }

    // 3. A feasible subset reaches the threshold
    #[test]
    fn feasible_subset_meets_threshold(units in units_strategy()) {
        let result = solve(&units);
        let required = required_electoral_votes(total_electoral_votes(&units));
        if result.feasible {
            prop_assert!(result.chosen_electoral_votes() >= required);
        }
    }

    // 4. Feasibility and optimal cost agree with brute force
    #[test]
    fn cost_is_minimal(units in units_strategy()) {
        let result = solve(&units);
        match cheapest_winning_cost(&units) {
            Some(best) => {
                prop_assert!(result.feasible);
                prop_assert_eq!(result.cost, best);
            }
            None => prop_assert!(!result.feasible),
        }
    }

    // 5. Chosen units appear in dataset order
    #[test]
    fn chosen_units_keep_dataset_order(units in units_strategy()) {
        let result = solve(&units);
        let positions: Vec<usize> = result
            .chosen_units
            .iter()
            .map(|chosen| units.iter().position(|u| u.name == chosen.name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // 6. Truncating majority-plus-one threshold
    #[test]
    fn required_is_majority_plus_one(total in 0u64..=1_000) {
        let required = required_electoral_votes(total);
        prop_assert!(required * 2 > total);
        prop_assert!(required.saturating_sub(1) * 2 <= total);
    }
}
