//! Remote archive access. The crawler only talks to [`RemoteSession`]; the
//! FTP implementation lives in [`ftp`] and tests use [`mock`].

pub mod ftp;
#[cfg(test)]
pub mod mock;

use std::io::Write;

use crate::firmware::DirectoryEntry;

pub use ftp::FtpSession;

/// The archive lists `.`, `..` and one stray header row before the real
/// entries.
const LEADING_ENTRIES: usize = 3;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The server refused the request with a 5xx reply (missing path,
    /// permission denied, not a directory). Recoverable: the caller skips the
    /// item.
    #[error("{0}")]
    Rejected(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SessionError::Rejected(_))
    }
}

/// The operations the crawler needs from an archive connection. The current
/// directory is session state, so one session must never be shared between
/// concurrent walkers.
pub trait RemoteSession {
    /// Host name used when building `ftp://` addresses.
    fn host(&self) -> &str;

    fn change_directory(&mut self, path: &str) -> Result<(), SessionError>;

    /// Raw listing of the current directory, in server order.
    fn list_directory(&mut self) -> Result<Vec<DirectoryEntry>, SessionError>;

    fn current_path(&mut self) -> Result<String, SessionError>;

    /// Stream `name` from the current directory into `sink` as binary.
    /// Returns the number of bytes written.
    fn retrieve_binary(&mut self, name: &str, sink: &mut dyn Write) -> Result<u64, SessionError>;

    fn close(&mut self) -> Result<(), SessionError>;
}

/// Listing of the current directory without its leading navigation rows.
/// Request a fresh one after every directory change.
pub fn listing<S: RemoteSession + ?Sized>(
    session: &mut S,
) -> Result<std::iter::Skip<std::vec::IntoIter<DirectoryEntry>>, SessionError> {
    Ok(session.list_directory()?.into_iter().skip(LEADING_ENTRIES))
}
