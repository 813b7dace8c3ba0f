pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::SearchMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_election_year, validate_path, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::validation::validate_required_field;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Settings for one run, after the config file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub year: u32,
    pub fast: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
    pub data_dir: String,
    pub output_dir: String,
}

impl RunConfig {
    pub fn new(year: u32) -> Self {
        Self {
            year,
            fast: false,
            quiet: false,
            verbose: false,
            json: false,
            data_dir: ".".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn year(&self) -> u32 {
        self.year
    }

    fn search_mode(&self) -> SearchMode {
        SearchMode::from_fast_flag(self.fast)
    }

    fn quiet(&self) -> bool {
        self.quiet
    }

    fn write_json(&self) -> bool {
        self.json
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_election_year("year", self.year)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "min-pop-vote")]
#[command(about = "Minimum popular vote needed to win the electoral college")]
pub struct CliConfig {
    /// Election year (1828-2020, every four years)
    #[arg(short = 'y', long)]
    pub year: Option<u32>,

    /// Use the memoized search instead of the exhaustive one
    #[arg(short = 'f', long)]
    pub fast: bool,

    /// Suppress dataset and result listings
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Directory containing data/<year>.csv
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Directory receiving toWin/<year>_win.csv
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Also write toWin/<year>_win.json
    #[arg(long)]
    pub json: bool,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Optional TOML settings file; command-line flags take precedence
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file with the command line and validates the result.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        let run = merge(self, &file)?;
        run.validate()?;
        Ok(run)
    }
}

#[cfg(feature = "cli")]
fn merge(cli: &CliConfig, file: &TomlConfig) -> Result<RunConfig> {
    let year = cli.year.or(file.election.year);
    let year = *validate_required_field("year", &year)?;

    let mut run = RunConfig::new(year);
    run.fast = cli.fast || file.search.fast.unwrap_or(false);
    run.quiet = cli.quiet || file.logging.quiet.unwrap_or(false);
    run.verbose = cli.verbose || file.logging.verbose.unwrap_or(false);
    run.json = cli.json || file.output.json.unwrap_or(false);
    if let Some(data_dir) = cli.data_dir.as_ref().or(file.dataset.data_dir.as_ref()) {
        run.data_dir = data_dir.clone();
    }
    if let Some(output_dir) = cli.output_dir.as_ref().or(file.output.output_dir.as_ref()) {
        run.output_dir = output_dir.clone();
    }
    Ok(run)
}
