use aes_t_tables::KeyError;
use cache_utils::mmap::MapError;
use thiserror::Error;

pub const USAGE: &str = "usage: synthetic_benchmark [75 50 25 10]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("declared length {length} needs {needed} bytes, the buffer has {available}")]
    TooShort {
        length: u32,
        needed: usize,
        available: usize,
    },
}

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("{}", USAGE)]
    Usage,
    #[error("memory placement failed: {0}")]
    Placement(#[from] MapError),
    #[error("key expansion failed: {0}")]
    Key(#[from] KeyError),
    #[error(transparent)]
    Container(#[from] ContainerError),
}
