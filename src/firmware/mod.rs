mod catalog;
mod category;
mod entry;
mod record;

pub use catalog::{Catalog, CatalogError};
pub use category::FileCategory;
pub use entry::DirectoryEntry;
pub use record::FirmwareRecord;
