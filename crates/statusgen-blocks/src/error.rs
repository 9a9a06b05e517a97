//! Error types for statusgen-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No begin marker found in {label}")]
    MissingMarker { label: String },

    #[error("Begin marker in {label} is never closed by an end marker")]
    UnterminatedRegion { label: String },
}
