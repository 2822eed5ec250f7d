use serde::Serialize;

/// Metadata for one downloaded firmware archive. Fields that could not be
/// extracted serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirmwareRecord {
    device_name: String,
    vendor: String,
    firmware_version: Option<String>,
    device_class: Option<String>,
    release_date: Option<f64>,
    file_url: String,
}

#[allow(unused)]
impl FirmwareRecord {
    pub fn new(
        device_name: String,
        vendor: String,
        firmware_version: Option<String>,
        device_class: Option<String>,
        release_date: Option<f64>,
        file_url: String,
    ) -> Self {
        Self {
            device_name,
            vendor,
            firmware_version,
            device_class,
            release_date,
            file_url,
        }
    }

    /// Product directory the file was found under, e.g. `dir-825`.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn firmware_version(&self) -> Option<&str> {
        self.firmware_version.as_deref()
    }

    pub fn device_class(&self) -> Option<&str> {
        self.device_class.as_deref()
    }

    /// Unix seconds of the remote `modify` fact.
    pub fn release_date(&self) -> Option<f64> {
        self.release_date
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }
}
