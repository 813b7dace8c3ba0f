//! Writing the winning subset back out.
//!
//! The CSV layout is a summary line
//! `total_electoral_votes,total_popular_votes,required_electoral_votes,cost`
//! followed by `name,code,electoral_votes,flip_cost` for each chosen unit.

use crate::domain::model::WinPlan;
use crate::utils::error::{MinPopVoteError, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result path for `year`, relative to the output directory.
pub fn output_filename(year: u32) -> String {
    format!("toWin/{}_win.csv", year)
}

pub fn json_output_filename(year: u32) -> String {
    format!("toWin/{}_win.json", year)
}

pub fn render_csv(plan: &WinPlan) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    let summary = WinSummary::from_plan(plan);
    writer.write_record(summary.fields().iter().map(u64::to_string))?;

    for unit in &plan.result.chosen_units {
        writer.write_record([
            unit.name.clone(),
            unit.code.clone(),
            unit.electoral_votes.to_string(),
            unit.flip_cost().to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| MinPopVoteError::IoError(e.into_error()))
}

#[derive(Debug, Serialize)]
struct JsonUnit<'a> {
    name: &'a str,
    code: &'a str,
    electoral_votes: u32,
    flip_cost: u64,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    year: u32,
    feasible: bool,
    #[serde(flatten)]
    summary: WinSummary,
    chosen_units: Vec<JsonUnit<'a>>,
}

pub fn render_json(plan: &WinPlan) -> Result<Vec<u8>> {
    let report = JsonReport {
        year: plan.year,
        feasible: plan.result.feasible,
        summary: WinSummary::from_plan(plan),
        chosen_units: plan
            .result
            .chosen_units
            .iter()
            .map(|unit| JsonUnit {
                name: &unit.name,
                code: &unit.code,
                electoral_votes: unit.electoral_votes,
                flip_cost: unit.flip_cost(),
            })
            .collect(),
    };
    Ok(serde_json::to_vec_pretty(&report)?)
}

/// The four numbers on the first line of a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub total_electoral_votes: u64,
    pub total_popular_votes: u64,
    pub required_electoral_votes: u64,
    pub cost: u64,
}

impl WinSummary {
    pub fn from_plan(plan: &WinPlan) -> Self {
        Self {
            total_electoral_votes: plan.totals.total_electoral_votes,
            total_popular_votes: plan.totals.total_popular_votes,
            required_electoral_votes: plan.totals.required_electoral_votes,
            cost: plan.result.cost,
        }
    }

    fn fields(&self) -> [u64; 4] {
        [
            self.total_electoral_votes,
            self.total_popular_votes,
            self.required_electoral_votes,
            self.cost,
        ]
    }

    pub fn parse(line: &str) -> Result<Self> {
        let malformed = |reason: String| MinPopVoteError::MalformedSummary {
            line: line.to_string(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(line.as_bytes());
        let record = match reader.records().next() {
            Some(record) => record?,
            None => return Err(malformed("empty line".to_string())),
        };

        let values = record
            .iter()
            .map(|field| {
                field
                    .parse::<u64>()
                    .map_err(|e| malformed(format!("'{}' is not a count: {}", field, e)))
            })
            .collect::<Result<Vec<u64>>>()?;

        match values.as_slice() {
            &[total_electoral_votes, total_popular_votes, required_electoral_votes, cost] => {
                Ok(Self {
                    total_electoral_votes,
                    total_popular_votes,
                    required_electoral_votes,
                    cost,
                })
            }
            _ => Err(malformed(format!("expected 4 fields, found {}", values.len()))),
        }
    }
}

/// Console rendering of a plan, one unit per line.
pub fn describe(plan: &WinPlan) -> String {
    PlanDescription(plan).to_string()
}

struct PlanDescription<'a>(&'a WinPlan);

impl fmt::Display for PlanDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let totals = &plan.totals;
        let result = &plan.result;

        writeln!(f, "Election {}", plan.year)?;
        writeln!(
            f,
            "  Total electoral votes: {} (need {} to win)",
            totals.total_electoral_votes, totals.required_electoral_votes
        )?;
        writeln!(f, "  Total popular votes:   {}", totals.total_popular_votes)?;

        if !result.feasible {
            return writeln!(f, "  No subset of units reaches the required electoral votes.");
        }

        writeln!(f, "  Units to win:")?;
        for unit in &result.chosen_units {
            writeln!(
                f,
                "    {} ({}): {} EVs, {} votes",
                unit.name,
                unit.code,
                unit.electoral_votes,
                unit.flip_cost()
            )?;
        }

        let share = if totals.total_popular_votes > 0 {
            100.0 * result.cost as f64 / totals.total_popular_votes as f64
        } else {
            0.0
        };
        writeln!(
            f,
            "  Minimum popular votes to win: {} ({:.2}% of votes cast), {} electoral votes",
            result.cost,
            share,
            result.chosen_electoral_votes()
        )
    }
}
