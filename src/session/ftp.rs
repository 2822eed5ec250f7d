use std::collections::HashMap;
use std::io::{self, Write};

use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};
use tracing::{debug, info, warn};

use super::{RemoteSession, SessionError};
use crate::firmware::DirectoryEntry;
use crate::repositories::Repository;

/// Permanent negative completion (5xx): missing path, permission denied, not
/// a directory. Transient 4xx replies such as 421 mean the control connection
/// is going away.
fn is_refusal(code: u32) -> bool {
    (500..600).contains(&code)
}

impl From<FtpError> for SessionError {
    fn from(err: FtpError) -> Self {
        match &err {
            FtpError::UnexpectedResponse(resp) if is_refusal(resp.status.code()) => {
                SessionError::Rejected(err.to_string())
            }
            _ => SessionError::Connection(err.to_string()),
        }
    }
}

/// Blocking FTP session backed by `suppaftp`.
pub struct FtpSession {
    stream: FtpStream,
    host: String,
}

impl FtpSession {
    /// Connect, log in and switch to binary transfers.
    pub fn connect(repo: &Repository) -> anyhow::Result<Self> {
        let endpoint = repo.endpoint()?;
        let (user, password) = repo.credentials();

        let mut stream = FtpStream::connect((endpoint.host.as_str(), endpoint.port))?;
        if let Some(welcome) = stream.get_welcome_msg() {
            info!(host = %endpoint.host, "{}", welcome.trim_end());
        }
        stream.login(user, password)?;
        stream.transfer_type(FileType::Binary)?;
        info!(host = %endpoint.host, user, "logged in");

        Ok(Self {
            stream,
            host: endpoint.host,
        })
    }
}

impl RemoteSession for FtpSession {
    fn host(&self) -> &str {
        &self.host
    }

    fn change_directory(&mut self, path: &str) -> Result<(), SessionError> {
        debug!(path, "cwd");
        Ok(self.stream.cwd(path)?)
    }

    fn list_directory(&mut self) -> Result<Vec<DirectoryEntry>, SessionError> {
        let lines = self.stream.mlsd(None)?;
        let entries = lines
            .into_iter()
            .map(|line| {
                DirectoryEntry::from_mlsd_line(&line).unwrap_or_else(|| {
                    // keep the row so the leading-entry skip still lines up
                    warn!(line = %line, "unparseable MLSD line");
                    DirectoryEntry::new(line.trim_end(), HashMap::new())
                })
            })
            .collect();
        Ok(entries)
    }

    fn current_path(&mut self) -> Result<String, SessionError> {
        Ok(self.stream.pwd()?)
    }

    fn retrieve_binary(&mut self, name: &str, sink: &mut dyn Write) -> Result<u64, SessionError> {
        let written = self
            .stream
            .retr(name, |reader| io::copy(reader, &mut *sink).map_err(FtpError::ConnectionError))?;
        Ok(written)
    }

    fn close(&mut self) -> Result<(), SessionError> {
        Ok(self.stream.quit()?)
    }
}
