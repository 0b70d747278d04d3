use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use route2nm::config::Config;
use route2nm::{AppResult, output};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; stdout is reserved for the converted routes
    let filter = EnvFilter::new(format!(
        "route2nm={}",
        config.log_level.as_str().to_lowercase()
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", e.user_message());
            if e.is_graceful() {
                ExitCode::SUCCESS
            } else {
                tracing::error!("Conversion of {} failed", config.input.display());
                ExitCode::FAILURE
            }
        }
    }
}

fn run(config: &Config) -> AppResult<()> {
    tracing::info!("Converting {}", config.input.display());

    let input = output::read_input(&config.input)?;
    let conversion = route2nm::convert(&input, config.policy)?;

    if conversion.routes.is_empty() {
        tracing::warn!("No routes found in {}", config.input.display());
    }
    for skipped in &conversion.skipped {
        eprintln!("Skipped {}", skipped);
    }

    if config.dry_run {
        println!("\nDry run, nothing written");
    } else {
        let today = chrono::Local::now().date_naive();
        let path = output::next_output_path(&config.input, config.output_dir.as_deref(), today)?;
        output::write_output(&path, &conversion.rendered)?;
        println!("\nNew Filename  {} written successfully", path.display());
    }

    if config.print {
        println!("{}", conversion.rendered);
    }

    Ok(())
}
