pub mod dlink;
mod models;

use std::{fs, path::Path, sync::OnceLock};

pub use models::Repository;

/// Env var that, when set, replaces the bundled repositories file.
pub const REPOSITORIES_ENV: &str = "FIRMWARE_REPOSITORIES";

/// Single, module-private cache (set exactly once).
static CACHE: OnceLock<Vec<Repository>> = OnceLock::new();

/// Initialize from a JSON file path.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<(), ReposError> {
    let data = fs::read_to_string(path).map_err(ReposError::Io)?;
    init_from_json_str(&data)
}

/// Initialize from a JSON string.
pub fn init_from_json_str(json: &str) -> Result<(), ReposError> {
    let parsed = parse_repositories(json)?;
    CACHE
        .set(parsed)
        .map_err(|_| ReposError::AlreadyInitialized)?;
    Ok(())
}

/// Initialize from an env var containing JSON.
pub fn init_from_env(var: &str) -> Result<(), ReposError> {
    let s = std::env::var(var).map_err(|_| ReposError::MissingEnv(var.to_string()))?;
    init_from_json_str(&s)
}

fn parse_repositories(json: &str) -> Result<Vec<Repository>, ReposError> {
    let parsed: Vec<Repository> = serde_json::from_str(json).map_err(ReposError::Json)?;
    for repo in &parsed {
        repo.endpoint()?;
    }
    Ok(parsed)
}

/// Find by name without cloning.
pub fn by_name(name: &str) -> Result<Option<&'static Repository>, ReposError> {
    let repos = CACHE.get().ok_or(ReposError::NotInitialized)?;
    Ok(repos.iter().find(|r| r.name() == name))
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum ReposError {
    #[error("repositories are not initialized")]
    NotInitialized,
    #[error("repositories already initialized")]
    AlreadyInitialized,
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("invalid repository url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
