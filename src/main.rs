use clap::Parser;
use min_pop_vote::utils::logger;
use min_pop_vote::{CliConfig, ElectionPipeline, EtlEngine, LocalStorage};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose, config.quiet);
    tracing::info!("Starting min-pop-vote for {}", config.year);
    tracing::debug!("Run config: {:?}", config);

    let input = LocalStorage::new(&config.data_dir);
    let output = LocalStorage::new(&config.output_dir);
    let pipeline = ElectionPipeline::new(input, output, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Done");
            tracing::debug!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
