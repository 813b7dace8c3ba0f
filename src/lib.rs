pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use crate::core::{etl::EtlEngine, optimizer::solve, pipeline::ElectionPipeline};
pub use domain::model::{ElectionTotals, SearchMode, SearchResult, Unit, WinPlan};
pub use utils::error::{MinPopVoteError, Result};
