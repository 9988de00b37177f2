use clap::Parser;
use topup_etl::utils::{logger, validation::Validate};
use topup_etl::{BatchPipeline, CliConfig, EtlEngine, FileDefectLog, LocalStorage, NoopMailer};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting topup-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir.clone());
    let defect_log = FileDefectLog::new(&config.data_dir);
    let pipeline = BatchPipeline::new(storage, config, defect_log, NoopMailer);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("Top-up run completed, report at {}", output_path);
        }
        Err(e) => {
            tracing::error!("Top-up run failed: {}", e);
            // Fatal diagnostics go to stdout before the abort, per the
            // tool's contract
            println!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
