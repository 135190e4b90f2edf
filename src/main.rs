use std::path::PathBuf;

use clap::Parser;
use futures::future::join_all;
use indexmap::IndexMap;
use tracing::error;

use sbt_releases::config::{ResolverConfig, log_path};
use sbt_releases::logging::{self, LogTarget};
use sbt_releases::version::coordinate::PackageCoordinate;
use sbt_releases::version::registries::SbtPackageResolver;
use sbt_releases::version::registry::resolve_in_registries;

#[derive(Parser)]
#[command(name = "sbt-releases")]
#[command(version, about = "Discover published releases of sbt packages")]
struct Cli {
    /// Package coordinates, e.g. `org.typelevel:cats-core_2.13`
    #[arg(required = true, value_name = "GROUP:ARTIFACT")]
    packages: Vec<String>,

    /// Registry URL to search; may be repeated, tried in order
    #[arg(long = "registry", value_name = "URL")]
    registries: Vec<String>,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not fall back to maven-metadata.xml when the crawl finds nothing
    #[arg(long)]
    no_fallback: bool,

    /// Write JSON logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = if cli.log_file {
        LogTarget::File(log_path())
    } else {
        LogTarget::Stderr
    };
    let _guard = logging::init(&target)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::load_or_default()?,
    };
    if !cli.registries.is_empty() {
        config.registry_urls = cli.registries;
    }
    if cli.no_fallback {
        config.fallback.enabled = false;
    }

    let coordinates = cli
        .packages
        .iter()
        .map(String::as_str)
        .map(PackageCoordinate::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let resolver = SbtPackageResolver::from_config(&config);
    let results = join_all(
        coordinates
            .iter()
            .map(|coordinate| resolve_in_registries(&resolver, coordinate, &config.registry_urls)),
    )
    .await;

    let mut output = IndexMap::new();
    for (coordinate, result) in coordinates.iter().zip(results) {
        let result = result.inspect_err(|e| error!("Failed to resolve {}: {}", coordinate, e))?;
        output.insert(coordinate.to_string(), result);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
