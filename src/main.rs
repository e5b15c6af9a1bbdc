use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use futures_util::future::join_all;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use portrait_resolver::application::{CuratedCatalog, ResolveImageUseCase};
use portrait_resolver::domain::CharacterRef;
use portrait_resolver::infrastructure::catalog::{
    demo_characters, filter_name_starts_with, load_characters_file,
};
use portrait_resolver::infrastructure::image::http_probe::DEFAULT_USER_AGENT;
use portrait_resolver::infrastructure::{AppConfig, CliArgs, HttpImageProbe};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn create_resolver(config: &AppConfig) -> Result<ResolveImageUseCase> {
    let user_agent = config
        .resolver
        .user_agent
        .as_deref()
        .unwrap_or(DEFAULT_USER_AGENT);
    let probe = Arc::new(HttpImageProbe::with_user_agent(user_agent)?);
    let curated = CuratedCatalog::builtin().with_entries(config.curated.iter().cloned());

    Ok(ResolveImageUseCase::from_config(
        probe,
        &config.resolver,
        curated,
    ))
}

async fn load_characters(args: &CliArgs) -> Result<Vec<CharacterRef>> {
    let characters = match &args.characters {
        Some(path) => load_characters_file(path).await?,
        None => demo_characters(),
    };

    Ok(match &args.name_starts_with {
        Some(prefix) => filter_name_starts_with(characters, prefix),
        None => characters,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;

    info!(version = portrait_resolver::VERSION, "Starting portrait resolver");

    let resolver = create_resolver(&config)?;
    let characters = load_characters(&args).await?;

    if args.preload {
        resolver.preload_images(&characters).await;
    }

    let urls = join_all(characters.iter().map(|c| resolver.resolve_default(c))).await;

    for (character, url) in characters.iter().zip(urls) {
        println!("{}\t{}\t{}", character.id, character.name, url);
    }

    println!("{}", resolver.cache_stats());

    Ok(())
}
