use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

const DEFAULT_DOWNLOAD_DIR: &str = "firmware_files";
const DEFAULT_METADATA_FILE: &str = "metadata.json";
const DEFAULT_LOG_FILE: &str = "logfile.txt";
const ANONYMOUS_USER: &str = "anonymous";

/// One vendor archive; serde is confined to this module tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) vendor: String,
    #[serde(rename = "parameters")]
    pub(crate) other_parameters: Option<HashMap<String, String>>,
}

impl Repository {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Archive root, e.g. `ftp://ftp.dlink.de`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Vendor label written into every metadata record.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    fn parameter(&self, key: &str) -> Option<&str> {
        self.other_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }

    /// Parse `url` and check that it points at an FTP server.
    pub fn endpoint(&self) -> Result<Endpoint, super::ReposError> {
        let parsed = Url::parse(&self.url).map_err(|source| super::ReposError::InvalidUrl {
            url: self.url.clone(),
            reason: source.to_string(),
        })?;

        if parsed.scheme() != "ftp" {
            return Err(super::ReposError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| super::ReposError::InvalidUrl {
                url: self.url.clone(),
                reason: "missing host".to_string(),
            })?
            .to_string();

        Ok(Endpoint {
            host,
            port: parsed.port_or_known_default().unwrap_or(21),
        })
    }

    pub fn download_dir(&self) -> &str {
        self.parameter("download_dir").unwrap_or(DEFAULT_DOWNLOAD_DIR)
    }

    pub fn metadata_file(&self) -> &str {
        self.parameter("metadata_file").unwrap_or(DEFAULT_METADATA_FILE)
    }

    pub fn log_file(&self) -> &str {
        self.parameter("log_file").unwrap_or(DEFAULT_LOG_FILE)
    }

    /// Login pair; anonymous with an empty password when not configured.
    pub fn credentials(&self) -> (&str, &str) {
        (
            self.parameter("user").unwrap_or(ANONYMOUS_USER),
            self.parameter("password").unwrap_or(""),
        )
    }
}

/// Host and control port of an FTP archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}
