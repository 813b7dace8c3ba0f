use crate::core::dataset::{input_filename, parse_units};
use crate::core::optimizer::{election_totals, solve_with};
use crate::core::report::{describe, json_output_filename, output_filename, render_csv, render_json};
use crate::core::{ConfigProvider, Pipeline, SearchMode, Storage, Unit, WinPlan};
use crate::utils::error::{MinPopVoteError, Result};

/// Beyond this many units the exhaustive search stops finishing in reasonable time.
const EXHAUSTIVE_SEARCH_WARN_UNITS: usize = 30;

/// Loads one year's dataset, finds the cheapest winning subset, and writes it out.
pub struct ElectionPipeline<S: Storage, C: ConfigProvider> {
    input: S,
    output: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ElectionPipeline<S, C> {
    pub fn new(input: S, output: S, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    async fn write_output(&self, path: &str, data: &[u8]) -> Result<()> {
        self.output
            .write_file(path, data)
            .await
            .map_err(|e| match e {
                MinPopVoteError::IoError(source) => MinPopVoteError::OutputUnavailable {
                    path: path.to_string(),
                    source,
                },
                other => other,
            })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ElectionPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Unit>> {
        let path = input_filename(self.config.year());
        tracing::debug!("Reading dataset {}", path);

        let data = self.input.read_file(&path).await.map_err(|e| match e {
            MinPopVoteError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                MinPopVoteError::DatasetNotFound { path: path.clone() }
            }
            other => other,
        })?;

        let units = parse_units(&data)?;
        if units.is_empty() {
            tracing::warn!("{} contains no valid records", path);
        }

        if !self.config.quiet() {
            println!("Election {} dataset: {} units", self.config.year(), units.len());
            for unit in &units {
                println!(
                    "  {} ({}): {} EVs, {} popular votes",
                    unit.name, unit.code, unit.electoral_votes, unit.popular_votes
                );
            }
        }

        Ok(units)
    }

    async fn transform(&self, units: Vec<Unit>) -> Result<WinPlan> {
        let mode = self.config.search_mode();
        if mode == SearchMode::Exhaustive && units.len() > EXHAUSTIVE_SEARCH_WARN_UNITS {
            tracing::warn!(
                "Exhaustive search over {} units may not finish; pass --fast for the memoized search",
                units.len()
            );
        }

        let totals = election_totals(&units);
        let result = solve_with(&units, mode);
        tracing::debug!(
            "Search finished: feasible={}, cost={}, {} units chosen",
            result.feasible,
            result.cost,
            result.chosen_units.len()
        );

        Ok(WinPlan {
            year: self.config.year(),
            totals,
            result,
        })
    }

    async fn load(&self, plan: WinPlan) -> Result<String> {
        if !self.config.quiet() {
            print!("{}", describe(&plan));
        }

        let path = output_filename(plan.year);
        let csv = render_csv(&plan)?;
        tracing::debug!("Writing {} bytes to {}", csv.len(), path);
        self.write_output(&path, &csv).await?;

        if self.config.write_json() {
            let json_path = json_output_filename(plan.year);
            let json = render_json(&plan)?;
            self.write_output(&json_path, &json).await?;
            tracing::debug!("JSON summary saved to {}", json_path);
        }

        Ok(path)
    }
}
