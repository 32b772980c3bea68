use libris_core::CatalogError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read catalog file {path}: {reason}")]
    CatalogFile { path: String, reason: String },

    #[error("Invalid JSON in {source_name}: {reason}")]
    InvalidJson { source_name: String, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
