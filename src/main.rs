use clap::error::ErrorKind;
use clap::Parser;
use league_calendar::config::cli::USAGE_EXAMPLE;
use league_calendar::utils::logger;
use league_calendar::{CalendarEngine, CalendarError, CalendarPipeline, CliConfig, LocalStorage};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("\n{}", USAGE_EXAMPLE);
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting league-calendar");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(".");
    let request = match config.resolve(&storage) {
        Ok(request) => request,
        Err(e) => fail(e),
    };
    let locale = request.report.locale;

    let pipeline = CalendarPipeline::new(storage, request);
    let engine = CalendarEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => println!("{}", locale.success_message(&output_path)),
        Err(e) => fail(e),
    }
}

fn fail(e: CalendarError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
