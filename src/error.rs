use std::ffi::NulError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("native allocation returned no resource")]
    NativeAllocation,
    #[error("operation on a released texture handle")]
    InvalidHandle,
    #[error("texture path is empty")]
    EmptyPath,
    #[error("texture data is empty")]
    EmptyData,
    #[error("texture path is not representable as a native string")]
    PathEncoding(#[from] NulError),
    #[error("failed to load the native texture library")]
    LibraryLoad(#[source] libloading::Error),
    #[error("native texture library is missing export `{name}`")]
    MissingSymbol { name: &'static str },
}
