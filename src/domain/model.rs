use serde::{Deserialize, Serialize};

/// One electoral unit (a state, or D.C.) as read from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub code: String,
    pub electoral_votes: u32,
    pub popular_votes: u64,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        electoral_votes: u32,
        popular_votes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            electoral_votes,
            popular_votes,
        }
    }

    pub fn flip_cost(&self) -> u64 {
        flip_cost(self.popular_votes)
    }
}

/// Smallest number of popular votes that carries a unit: a simple majority plus one.
pub fn flip_cost(popular_votes: u64) -> u64 {
    popular_votes / 2 + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionTotals {
    pub total_electoral_votes: u64,
    pub total_popular_votes: u64,
    pub required_electoral_votes: u64,
}

/// Outcome of one (sub)search: the units chosen and what it costs to flip them.
///
/// `chosen_units` is kept in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub feasible: bool,
    pub cost: u64,
    pub chosen_units: Vec<Unit>,
}

impl SearchResult {
    pub fn chosen_electoral_votes(&self) -> u64 {
        self.chosen_units
            .iter()
            .map(|unit| u64::from(unit.electoral_votes))
            .sum()
    }
}

/// Everything the writer needs: the election totals and the winning subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPlan {
    pub year: u32,
    pub totals: ElectionTotals,
    pub result: SearchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Plain include/exclude recursion over every subset.
    #[default]
    Exhaustive,
    /// Same recursion, cached on (position, votes still needed).
    Memoized,
}

impl SearchMode {
    pub fn from_fast_flag(fast: bool) -> Self {
        if fast {
            SearchMode::Memoized
        } else {
            SearchMode::Exhaustive
        }
    }
}
