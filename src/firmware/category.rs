use std::fmt;

/// What a file in a `driver_software` folder contains, judged by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Firmware,
    Software,
    Revision,
    Driver,
    Unrecognized,
}

impl FileCategory {
    /// Markers are checked in this order; the first hit wins.
    const MARKERS: [(&'static str, FileCategory); 4] = [
        ("_fw_", FileCategory::Firmware),
        ("_sw_", FileCategory::Software),
        ("_rev", FileCategory::Revision),
        ("_drv_", FileCategory::Driver),
    ];

    pub fn classify(file_name: &str) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| file_name.contains(marker))
            .map(|(_, category)| *category)
            .unwrap_or(FileCategory::Unrecognized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Firmware => "firmware",
            FileCategory::Software => "software",
            FileCategory::Revision => "revision",
            FileCategory::Driver => "driver",
            FileCategory::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
