use anyhow::{Context, Result};
use std::{env, path::PathBuf, process};
use wikilink_config::Config;
use wikilink_engine::parsing::snapshot;
use wikilink_engine::{
    DefaultResolver, InlineParser, Resolution, Resolver, from_fn, parse_document, read_document,
};

/// Builds the resolver described by the config: listed targets render as
/// plain text, everything else goes through the default resolver.
fn build_resolver(config: Config) -> impl Resolver {
    let fallback = DefaultResolver::with_extension(config.default_extension.clone());
    from_fn(move |target: &str, fragment: &str| {
        if config.is_plain_target(target) {
            return Ok(Resolution::Absent);
        }
        fallback.resolve_wikilink(target, fragment)
    })
}

fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    let config = Config::load().context("loading config")?;

    match config {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }
}

fn run(path: PathBuf) -> Result<()> {
    let config = load_config()?;
    let parser = InlineParser::with_resolver(build_resolver(config));

    let rope = read_document(&path).with_context(|| format!("reading {}", path.display()))?;
    let doc = parse_document(&rope, &parser)
        .with_context(|| format!("converting {}", path.display()))?;

    print!("{}", snapshot::outline(&rope, &doc));
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(PathBuf::from(&args[1])) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
