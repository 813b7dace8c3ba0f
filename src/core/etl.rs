use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order; nothing is written if an earlier phase fails.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();

        // Extract
        tracing::info!("Loading election data...");
        let phase = Instant::now();
        let units = self.pipeline.extract().await?;
        tracing::info!("Loaded {} units in {:?}", units.len(), phase.elapsed());

        // Transform
        tracing::info!("Searching for the cheapest winning subset...");
        let phase = Instant::now();
        let plan = self.pipeline.transform(units).await?;
        tracing::info!(
            "Search chose {} units (feasible: {}, cost: {}) in {:?}",
            plan.result.chosen_units.len(),
            plan.result.feasible,
            plan.result.cost,
            phase.elapsed()
        );

        // Load
        tracing::info!("Writing result...");
        let output_path = self.pipeline.load(plan).await?;
        tracing::info!("Result saved to {} ({:?} total)", output_path, started.elapsed());

        Ok(output_path)
    }
}
