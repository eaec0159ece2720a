use clap::Parser;
use linelog::utils::{logger, validation::Validate};
use linelog::{CliConfig, Console, LineSink, StderrSink, StdoutSink};
use std::fmt::Display;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let values: Vec<&dyn Display> = config
        .values
        .iter()
        .map(|v| v as &dyn Display)
        .collect();

    let result = if config.stderr {
        run(&Console::new(StderrSink), &values, config.repeat)
    } else {
        run(&Console::new(StdoutSink), &values, config.repeat)
    };

    if let Err(e) = result {
        tracing::error!("Write failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run<S: LineSink>(
    console: &Console<S>,
    values: &[&dyn Display],
    repeat: usize,
) -> linelog::Result<()> {
    for _ in 0..repeat {
        console.try_log_args(values)?;
    }
    Ok(())
}
