use std::fmt;

/// Counters collected over one crawl.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    pub directories_entered: usize,
    /// Top-level names on the skip list.
    pub directories_skipped: usize,
    /// Change-directory calls the server refused.
    pub directories_rejected: usize,
    pub firmware_downloaded: usize,
    pub downloads_failed: usize,
    /// Archives already present locally with the same size.
    pub unchanged: usize,
    /// Leaf entries that are not `.zip` archives.
    pub ignored: usize,
    /// Software, revision and driver archives; recognised but not fetched.
    pub reserved: usize,
    pub unrecognized: usize,
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directories entered:   {}", self.directories_entered)?;
        writeln!(f, "Directories skipped:   {}", self.directories_skipped)?;
        writeln!(f, "Directories rejected:  {}", self.directories_rejected)?;
        writeln!(f, "Firmware downloaded:   {}", self.firmware_downloaded)?;
        writeln!(f, "Downloads failed:      {}", self.downloads_failed)?;
        writeln!(f, "Unchanged archives:    {}", self.unchanged)?;
        writeln!(f, "Non-archive entries:   {}", self.ignored)?;
        writeln!(f, "Software/rev/driver:   {}", self.reserved)?;
        write!(f, "Unrecognized archives: {}", self.unrecognized)
    }
}
