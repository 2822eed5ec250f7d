mod crawler;
mod firmware;
mod helpers;
mod repositories;
mod session;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{env, fs, path::Path, path::PathBuf};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crawler::{CrawlError, CrawlOptions, CrawlReport, crawl_and_flush};
use repositories::{self as repos, Repository};
use session::FtpSession;

/// Archive crawled by this binary.
const REPOSITORY_NAME: &str = "dlink";

fn construct_properties_file_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources").join("repositories.json")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Repositories come from the env var when it is set, otherwise from the
/// bundled file.
fn load_repositories() -> Result<()> {
    if env::var_os(repos::REPOSITORIES_ENV).is_some() {
        repos::init_from_env(repos::REPOSITORIES_ENV)
            .with_context(|| format!("load repositories from ${}", repos::REPOSITORIES_ENV))?;
    } else {
        let path = construct_properties_file_path();
        repos::init_from_file(&path).with_context(|| format!("load repositories from {}", path.display()))?;
    }
    Ok(())
}

fn print_summary(repo: &Repository, report: &CrawlReport, metadata_path: &Path) {
    println!("\n=== Crawl summary ===");
    println!("Archive:  {}", repo.url());
    println!("Vendor:   {}", repo.vendor());
    if report.interrupted {
        println!("Status:   interrupted");
    }
    println!("{}", report.stats);
    println!("Records:  {} written to {}", report.catalog.len(), metadata_path.display());
}

/// Connect, crawl, then close the session and write the metadata file no
/// matter how the crawl ended.
fn crawl_blocking(
    repo: &'static Repository,
    shutdown: Arc<AtomicBool>,
) -> Result<(CrawlReport, Result<(), CrawlError>)> {
    let download_dir = PathBuf::from(repo.download_dir());
    fs::create_dir_all(&download_dir)
        .with_context(|| format!("create download directory {}", download_dir.display()))?;

    let mut session = FtpSession::connect(repo).with_context(|| format!("connect to {}", repo.url()))?;

    let options = CrawlOptions {
        vendor: repo.vendor().to_string(),
        download_dir: download_dir.clone(),
        log_file: download_dir.join(repo.log_file()),
        show_progress: true,
    };
    let metadata_path = download_dir.join(repo.metadata_file());
    let (report, outcome) = crawl_and_flush(&mut session, options, shutdown, &metadata_path)
        .with_context(|| format!("write metadata to {}", metadata_path.display()))?;

    Ok((report, outcome))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    load_repositories()?;

    let repo = repos::by_name(REPOSITORY_NAME)?
        .with_context(|| format!("repository '{REPOSITORY_NAME}' is not configured"))?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let listener = {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, shutting down after the current operation");
                shutdown.store(true, Ordering::SeqCst);
            }
        })
    };

    let (report, outcome) = tokio::task::spawn_blocking(move || crawl_blocking(repo, shutdown))
        .await
        .context("crawl task panicked")??;
    listener.abort();

    print_summary(repo, &report, &PathBuf::from(repo.download_dir()).join(repo.metadata_file()));

    if let Err(e) = &outcome {
        error!("crawl aborted: {e}");
    }
    outcome.context("crawl aborted")?;
    Ok(())
}
