//! Minimum popular vote needed to carry a majority of the electoral college.
//!
//! Every unit is either flipped (paying its flip cost and banking its
//! electoral votes) or left alone. The search walks the units in dataset
//! order, and at each position keeps whichever branch reaches the threshold,
//! preferring the cheaper one when both or neither do.

use crate::domain::model::{ElectionTotals, SearchMode, SearchResult, Unit};

pub fn total_electoral_votes(units: &[Unit]) -> u64 {
    units.iter().map(|unit| u64::from(unit.electoral_votes)).sum()
}

pub fn total_popular_votes(units: &[Unit]) -> u64 {
    units.iter().map(|unit| unit.popular_votes).sum()
}

/// Majority plus one, with truncating division.
pub fn required_electoral_votes(total_electoral_votes: u64) -> u64 {
    total_electoral_votes / 2 + 1
}

pub fn election_totals(units: &[Unit]) -> ElectionTotals {
    let total_electoral_votes = total_electoral_votes(units);
    ElectionTotals {
        total_electoral_votes,
        total_popular_votes: total_popular_votes(units),
        required_electoral_votes: required_electoral_votes(total_electoral_votes),
    }
}

/// Memoized search over the whole dataset.
pub fn solve(units: &[Unit]) -> SearchResult {
    solve_with(units, SearchMode::Memoized)
}

/// Unmemoized search: visits all 2^n subsets, only practical for small inputs.
pub fn solve_exhaustive(units: &[Unit]) -> SearchResult {
    solve_with(units, SearchMode::Exhaustive)
}

pub fn solve_with(units: &[Unit], mode: SearchMode) -> SearchResult {
    let required = required_electoral_votes(total_electoral_votes(units));
    tracing::debug!(
        "Searching {} units for {} electoral votes ({:?})",
        units.len(),
        required,
        mode
    );

    let best = match mode {
        SearchMode::Memoized => MemoizedSearch::new(units, required).search(0, required as i64),
        SearchMode::Exhaustive => search_exhaustive(units, 0, required as i64),
    };
    best.into_result(units)
}

/// A branch outcome while the recursion unwinds.
///
/// `picks` holds unit indices in the order they were added, which is the
/// reverse of dataset order since the deepest position is pushed first.
#[derive(Debug, Clone)]
struct Partial {
    feasible: bool,
    cost: u64,
    picks: Vec<usize>,
}

impl Partial {
    fn base(evs_needed: i64) -> Self {
        Self {
            feasible: evs_needed <= 0,
            cost: 0,
            picks: Vec::new(),
        }
    }

    fn with_unit(mut self, units: &[Unit], position: usize) -> Self {
        self.cost += units[position].flip_cost();
        self.picks.push(position);
        self
    }

    fn into_result(self, units: &[Unit]) -> SearchResult {
        SearchResult {
            feasible: self.feasible,
            cost: self.cost,
            chosen_units: self
                .picks
                .iter()
                .rev()
                .map(|&index| units[index].clone())
                .collect(),
        }
    }
}

/// Feasibility first, then strictly lower cost; ties keep the unit out.
///
/// Two infeasible branches are still ranked by cost.
fn choose(including: Partial, excluding: Partial) -> Partial {
    match (including.feasible, excluding.feasible) {
        (true, false) => including,
        (false, true) => excluding,
        _ if including.cost < excluding.cost => including,
        _ => excluding,
    }
}

fn search_exhaustive(units: &[Unit], position: usize, evs_needed: i64) -> Partial {
    if position == units.len() {
        return Partial::base(evs_needed);
    }

    let excluding = search_exhaustive(units, position + 1, evs_needed);
    let including = search_exhaustive(
        units,
        position + 1,
        evs_needed - i64::from(units[position].electoral_votes),
    )
    .with_unit(units, position);

    choose(including, excluding)
}

/// Owns the memo table for a single run, indexed `[position][evs_needed]`.
struct MemoizedSearch<'a> {
    units: &'a [Unit],
    memo: Vec<Vec<Option<Partial>>>,
}

impl<'a> MemoizedSearch<'a> {
    fn new(units: &'a [Unit], required: u64) -> Self {
        let rows = units.len() + 1;
        let columns = required as usize + 1;
        tracing::debug!("Allocating {}x{} memo table", rows, columns);
        Self {
            units,
            memo: vec![vec![None; columns]; rows],
        }
    }

    fn search(&mut self, position: usize, evs_needed: i64) -> Partial {
        // Over-satisfied is the same state as satisfied; keeps the key in range.
        let evs_needed = evs_needed.max(0);

        if position == self.units.len() {
            return Partial::base(evs_needed);
        }

        let slot = evs_needed as usize;
        if let Some(hit) = &self.memo[position][slot] {
            return hit.clone();
        }

        let excluding = self.search(position + 1, evs_needed);
        let including = self
            .search(
                position + 1,
                evs_needed - i64::from(self.units[position].electoral_votes),
            )
            .with_unit(self.units, position);

        let best = choose(including, excluding);
        self.memo[position][slot] = Some(best.clone());
        best
    }
}
