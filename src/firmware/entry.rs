use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// `fact=value;fact=value; name`, as sent in reply to MLSD (RFC 3659).
fn mlsd_line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| {
        Regex::new(r"^(?P<facts>(?:[^;= ]+=[^;]*;)*) (?P<name>.+)$").expect("invalid MLSD line regex")
    })
}

/// One row of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: String,
    facts: HashMap<String, String>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, facts: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            facts,
        }
    }

    /// Parse a raw MLSD line. Fact keys are lowercased; malformed lines
    /// return `None`.
    pub fn from_mlsd_line(line: &str) -> Option<Self> {
        let caps = mlsd_line_regex().captures(line.trim_end_matches(['\r', '\n']))?;

        let facts = caps
            .name("facts")?
            .as_str()
            .split(';')
            .filter_map(|fact| fact.split_once('='))
            .map(|(key, value)| (key.to_ascii_lowercase(), value.to_string()))
            .collect();

        Some(Self::new(caps.name("name")?.as_str(), facts))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fact(&self, key: &str) -> Option<&str> {
        self.facts.get(key).map(String::as_str)
    }

    /// Byte size, if the server reported a numeric `size` fact.
    pub fn size(&self) -> Option<u64> {
        self.fact("size").and_then(|s| s.parse().ok())
    }

    /// Raw `modify` fact (`YYYYMMDDhhmmss`).
    pub fn modify(&self) -> Option<&str> {
        self.fact("modify")
    }

    // file | dir | cdir | pdir
    #[allow(unused)]
    pub fn kind(&self) -> Option<&str> {
        self.fact("type")
    }
}
