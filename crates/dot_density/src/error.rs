//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants
//! cover malformed polygons and invalid configuration. Running out of sampling budget is never
//! an error; it is reported through [`crate::sampling::SamplingResult::complete`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
