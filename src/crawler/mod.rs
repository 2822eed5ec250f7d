//! Walks the archive: product family → product → `driver_software`.
//!
//! Directory changes the server refuses are logged and the walk moves on to
//! the next sibling. Only connection and local I/O failures end a crawl
//! early, and either way [`Crawler::into_report`] hands back everything
//! collected so far.

mod evaluator;
mod stats;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::firmware::{Catalog, CatalogError};
use crate::helpers::ErrorLog;
use crate::repositories::dlink;
use crate::session::{RemoteSession, SessionError, listing};

pub use stats::CrawlStats;

/// Leaf folder holding firmware, software and driver archives.
const DRIVER_FOLDER: &str = "driver_software";

#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("local I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Written into every record.
    pub vendor: String,
    /// Archives are stored here under their remote names.
    pub download_dir: PathBuf,
    pub log_file: PathBuf,
    pub show_progress: bool,
}

/// What a crawl leaves behind.
#[derive(Debug)]
pub struct CrawlReport {
    pub catalog: Catalog,
    pub stats: CrawlStats,
    pub interrupted: bool,
}

pub struct Crawler<'s, S: RemoteSession + ?Sized> {
    session: &'s mut S,
    options: CrawlOptions,
    error_log: ErrorLog,
    shutdown: Arc<AtomicBool>,
    catalog: Catalog,
    stats: CrawlStats,
}

impl<'s, S: RemoteSession + ?Sized> Crawler<'s, S> {
    /// `shutdown` is polled before every directory change and file; once set
    /// the walk unwinds without starting new work.
    pub fn new(session: &'s mut S, options: CrawlOptions, shutdown: Arc<AtomicBool>) -> Self {
        let error_log = ErrorLog::new(options.log_file.clone());
        Self {
            session,
            options,
            error_log,
            shutdown,
            catalog: Catalog::new(),
            stats: CrawlStats::default(),
        }
    }

    fn interrupted(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Crawl from the archive root.
    pub fn run(&mut self) -> Result<(), CrawlError> {
        for entry in listing(&mut *self.session)? {
            if self.interrupted() {
                break;
            }

            let family = entry.name();
            if dlink::is_skipped(family) {
                debug!(family, "skip-listed");
                self.stats.directories_skipped += 1;
                continue;
            }
            if !self.enter(family)? {
                continue;
            }

            info!(family, "crawling product family");
            self.walk_family()?;
            self.session.change_directory("/")?;
        }
        Ok(())
    }

    fn walk_family(&mut self) -> Result<(), CrawlError> {
        for entry in listing(&mut *self.session)? {
            if self.interrupted() {
                break;
            }

            let product = entry.name();
            if !self.enter(product)? {
                continue;
            }
            self.walk_product(product)?;
            self.session.change_directory("..")?;
        }
        Ok(())
    }

    fn walk_product(&mut self, product: &str) -> Result<(), CrawlError> {
        for entry in listing(&mut *self.session)? {
            if entry.name() != DRIVER_FOLDER || self.interrupted() {
                continue;
            }
            if !self.enter(DRIVER_FOLDER)? {
                continue;
            }
            self.evaluate_folder(product)?;
            self.session.change_directory("..")?;
        }
        Ok(())
    }

    fn evaluate_folder(&mut self, product: &str) -> Result<(), CrawlError> {
        for entry in listing(&mut *self.session)? {
            if self.interrupted() {
                break;
            }
            self.evaluate_file(product, &entry)?;
        }
        Ok(())
    }

    /// Change into `name`. A refused change is logged and reported as
    /// `false`; anything else is fatal.
    fn enter(&mut self, name: &str) -> Result<bool, CrawlError> {
        match self.session.change_directory(name) {
            Ok(()) => {
                self.stats.directories_entered += 1;
                Ok(true)
            }
            Err(e) if e.is_rejected() => {
                let directory = self.session.current_path()?;
                self.error_log.record(&format!("cannot enter '{name}': {e}"), &directory);
                self.stats.directories_rejected += 1;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn into_report(self) -> CrawlReport {
        let interrupted = self.interrupted();
        CrawlReport {
            catalog: self.catalog,
            stats: self.stats,
            interrupted,
        }
    }
}

/// Crawl with `session`, then close it and write the catalog to
/// `metadata_path`, whether the walk completed, failed or was interrupted.
/// The outer error is a failed metadata write; the inner result is the
/// crawl's own.
pub fn crawl_and_flush<S: RemoteSession + ?Sized>(
    session: &mut S,
    options: CrawlOptions,
    shutdown: Arc<AtomicBool>,
    metadata_path: &Path,
) -> Result<(CrawlReport, Result<(), CrawlError>), CatalogError> {
    let mut crawler = Crawler::new(&mut *session, options, shutdown);
    let outcome = crawler.run();
    let report = crawler.into_report();

    if let Err(e) = session.close() {
        warn!("failed to close session: {e}");
    }

    report.catalog.write_to(metadata_path)?;
    info!(records = report.catalog.len(), path = %metadata_path.display(), "metadata written");

    Ok((report, outcome))
}
