use clap::Parser;
use clubscrape::{
    assets::{self, IdMap, ScanOptions},
    cli::{Cli, Commands},
    config::Config,
    fetcher::HttpSource,
    matcher::{Matcher, assign_assets},
    pipeline::ScrapePipeline,
    store,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scrape { output } => {
            info!(
                "Scraping {} leagues, {}ms between requests",
                config.leagues.len(),
                config.request_interval_ms
            );
            let source = HttpSource::new(&config)?;
            let report = ScrapePipeline::new(source, config).run().await;

            store::save_clubs(&output, &report.clubs)?;
            info!("Written {} to {}", report.summary(), output.display());
        }

        Commands::Assign {
            clubs,
            assets: assets_root,
            id_map,
            output,
        } => {
            let mut loaded = store::load_clubs(&clubs)?;
            if !loaded.rejected.is_empty() {
                warn!(
                    "{} invalid records left unmatched and kept as-is",
                    loaded.rejected.len()
                );
            }

            let id_map = id_map.as_deref().map(IdMap::load).transpose()?;
            let stop_words = config.stop_words();
            let pool = assets::scan_assets(
                &assets_root,
                &ScanOptions {
                    extensions: &config.image_extensions,
                    stop_words: &stop_words,
                    id_map: id_map.as_ref(),
                },
            )?;
            info!("Loaded {} assets", pool.len());

            let report = assign_assets(&mut loaded.clubs, &pool, &Matcher::new(stop_words));

            let output = output.unwrap_or(clubs);
            store::save_loaded(&output, &loaded)?;
            info!(
                "Assets added: {}, still missing: {}",
                report.matches.len(),
                report.unmatched.len()
            );
        }
    }

    Ok(())
}
