//! Error types for this library

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wall clock instant predates the Unix epoch")]
    PreEpochTime,
}
