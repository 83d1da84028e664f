use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomError {
    #[error("could not allocate a ROM buffer of {cells} cells")]
    AllocationFailed { cells: usize },

    #[error("address width of {0} bits does not fit in the host address space")]
    AddressWidthTooLarge(u32),

    #[error("could not write ROM image to {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RomError>;
