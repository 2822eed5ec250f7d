use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::session::{RemoteSession, SessionError};

fn progress_bar(name: &str, expected_size: Option<u64>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = match expected_size {
        Some(total) => ProgressBar::new(total),
        None => ProgressBar::no_length(),
    };
    let style = ProgressStyle::with_template(
        "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] \
         {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(format!("Downloading {name}"));
    pb
}

/// `<dest>.part`, next to `dest`.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

fn transfer<S: RemoteSession + ?Sized>(
    session: &mut S,
    name: &str,
    part: &Path,
    pb: &ProgressBar,
) -> Result<u64, SessionError> {
    let mut writer = pb.wrap_write(BufWriter::new(File::create(part)?));
    let written = session.retrieve_binary(name, &mut writer)?;
    writer.flush()?;
    Ok(written)
}

/// Retrieve `name` from the session's current directory into `dest`.
/// The transfer goes to a `.part` file that replaces `dest` only once it is
/// complete, so a failed transfer leaves any previous copy in place.
/// Returns the number of bytes written.
pub fn fetch_to_file<S: RemoteSession + ?Sized>(
    session: &mut S,
    name: &str,
    dest: &Path,
    expected_size: Option<u64>,
    show_progress: bool,
) -> Result<u64, SessionError> {
    let pb = progress_bar(name, expected_size, show_progress);
    let part = partial_path(dest);

    let outcome = transfer(session, name, &part, &pb).and_then(|written| {
        fs::rename(&part, dest)?;
        Ok(written)
    });

    let written = match outcome {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(&part);
            pb.abandon_with_message(format!("Failed {name}: {e}"));
            return Err(e);
        }
    };

    pb.finish_with_message(format!("Downloaded {name} to {}", dest.display()));
    Ok(written)
}
