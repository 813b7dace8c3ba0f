pub mod dataset;
pub mod etl;
pub mod optimizer;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{SearchMode, SearchResult, Unit, WinPlan};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
