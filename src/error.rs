use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid ciphertext size. The length should be a positive multiple of {block_size}, but the length is {found}")]
    InvalidLength { block_size: usize, found: usize },

    #[error("cannot compute a statistic over an empty sample")]
    EmptySample,

    #[error("bucket distributions have different min/max/step/bucket_count and cannot be correlated")]
    IncompatibleDistribution,
}

pub type Result<T> = core::result::Result<T, Error>;
