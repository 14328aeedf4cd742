use anyhow::{Context, Result};
use clap::{crate_version, App as ClapApp, Arg, ArgMatches};
use log::LevelFilter;
use std::sync::mpsc;
use stock_tui::app::App;
use stock_tui::config::Config;
use stock_tui::logger;

fn main() -> Result<()> {
    let matches = ClapApp::new("stock-tui")
        .version(crate_version!())
        .about("Terminal dashboard for tracking stock levels")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("threshold")
                .short("t")
                .long("threshold")
                .value_name("N")
                .help("Items with stock below N are listed as low stock")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dark")
                .long("dark")
                .help("Start in dark mode"),
        )
        .arg(
            Arg::with_name("empty")
                .long("empty")
                .help("Start without the demo items"),
        )
        .arg(
            Arg::with_name("write-config")
                .long("write-config")
                .help("Write the effective configuration to disk and exit"),
        )
        .get_matches();

    let (log_sender, log_receiver) = mpsc::channel();
    logger::init(LevelFilter::Debug, log_sender)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    apply_overrides(&mut config, &matches)?;

    if matches.is_present("write-config") {
        let saved = config.save();
        // No log panel without the UI
        for line in log_receiver.try_iter() {
            eprintln!("{}", line);
        }
        saved?;
        if let Some(path) = config.file_path() {
            println!("Wrote configuration to {}", path.display());
        }
        return Ok(());
    }

    App::start(config, log_receiver)
}

/// Apply command line flags on top of the loaded configuration.
///
fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(value) = matches.value_of("threshold") {
        let threshold: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid threshold '{}'", value))?;
        config.set_low_stock_threshold(threshold)?;
    }
    if matches.is_present("dark") {
        config.dark_mode = true;
    }
    if matches.is_present("empty") {
        config.seed_demo_items = false;
    }
    Ok(())
}
