use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use densemat::config::RenderConfig;
use densemat::demo;

/// Load a render configuration from a JSON file.
fn load_render_config<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RenderConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    anyhow::ensure!(
        config.is_within_limits(),
        "Invalid config {}: width must be at most {} and precision at most {}",
        path.as_ref().display(),
        RenderConfig::MAX_WIDTH,
        RenderConfig::MAX_PRECISION
    );
    Ok(config)
}

fn main() -> Result<()> {
    let matches = Command::new("densemat")
        .version(clap::crate_version!())
        .about("Walks through dense matrix arithmetic, transpose and reshape")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON render configuration (width, precision)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger = env_logger::Builder::default();
    logger
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "error,densemat=info"));
    if matches.get_flag("verbose") {
        logger.filter_module("densemat", LevelFilter::Debug);
    }
    logger.init();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Loading render config from {}", path.display());
            load_render_config(path)?
        }
        None => RenderConfig::default(),
    };

    let report = demo::run(&config)?;
    print!("{}", report);
    Ok(())
}
