use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{CrawlError, Crawler};
use crate::firmware::{DirectoryEntry, FileCategory, FirmwareRecord};
use crate::helpers::fetch_to_file;
use crate::repositories::dlink::{self, ExtractError};
use crate::session::RemoteSession;

const ARCHIVE_EXTENSION: &str = ".zip";

/// Remote names are stored as-is, so anything that is not a bare file name
/// (`../x.zip`, `/abs/x.zip`) would land outside the download directory.
fn is_plain_file_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(OsStr::new(name))
}

/// A local file with the remote name and the remote size is taken as already
/// downloaded. Without a size fact nothing counts as unchanged.
fn is_unchanged(local: &Path, remote_size: Option<u64>) -> bool {
    match (fs::metadata(local), remote_size) {
        (Ok(meta), Some(size)) => meta.is_file() && meta.len() == size,
        _ => false,
    }
}

impl<S: RemoteSession + ?Sized> Crawler<'_, S> {
    /// Handle one entry of a `driver_software` folder.
    pub(super) fn evaluate_file(&mut self, product: &str, entry: &DirectoryEntry) -> Result<(), CrawlError> {
        let name = entry.name();
        if !name.ends_with(ARCHIVE_EXTENSION) {
            self.stats.ignored += 1;
            return Ok(());
        }

        if !is_plain_file_name(name) {
            let directory = self.session.current_path()?;
            self.error_log.record(&format!("refusing unsafe file name '{name}'"), &directory);
            self.stats.ignored += 1;
            return Ok(());
        }

        let dest = self.options.download_dir.join(name);
        if is_unchanged(&dest, entry.size()) {
            debug!(file = name, "unchanged, skipping");
            self.stats.unchanged += 1;
            return Ok(());
        }

        match FileCategory::classify(name) {
            FileCategory::Firmware => self.process_firmware(product, entry, &dest),
            category @ (FileCategory::Software | FileCategory::Revision | FileCategory::Driver) => {
                // recognised, not processed yet
                debug!(file = name, %category, "skipping non-firmware archive");
                self.stats.reserved += 1;
                Ok(())
            }
            FileCategory::Unrecognized => {
                debug!(file = name, "no category marker");
                self.stats.unrecognized += 1;
                Ok(())
            }
        }
    }

    fn process_firmware(&mut self, product: &str, entry: &DirectoryEntry, dest: &Path) -> Result<(), CrawlError> {
        let name = entry.name();
        let directory = self.session.current_path()?;

        let device_class = self.or_log(dlink::classify_device(product).map(str::to_string), &directory);
        let release_date = self.or_log(dlink::release_timestamp(entry.modify()), &directory);
        let firmware_version = self.or_log(dlink::firmware_version(name), &directory);
        let file_url = format!("ftp://{}{}/{}", self.session.host(), directory, name);

        info!(
            device = product,
            version = firmware_version.as_deref().unwrap_or("<none>"),
            "new firmware {name}"
        );
        self.catalog.push(FirmwareRecord::new(
            product.to_string(),
            self.options.vendor.clone(),
            firmware_version,
            device_class,
            release_date,
            file_url,
        ));

        match fetch_to_file(&mut *self.session, name, dest, entry.size(), self.options.show_progress) {
            Ok(bytes) => {
                debug!(file = name, bytes, "downloaded");
                self.stats.firmware_downloaded += 1;
                Ok(())
            }
            Err(e) if e.is_rejected() => {
                self.error_log.record(&e, &directory);
                self.stats.downloads_failed += 1;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn or_log<T>(&self, extracted: Result<T, ExtractError>, directory: &str) -> Option<T> {
        extracted.map_err(|e| self.error_log.record(&e, directory)).ok()
    }
}
