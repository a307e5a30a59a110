//! Error types for Teinte.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown through Debug, but thiserror
                    // renders through Display. Redirect one to the other.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
#[error("`{value}` is not a valid color, expected `#rrggbb`")]
pub struct ColorParseError {
    pub value: String,
}

#[derive(Error)]
pub enum DecorateError {
    #[error("Failed to read page: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write decorated page: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to rewrite HTML")]
    RewriteFailed {
        #[source]
        source: lol_html::errors::RewritingError,
    },
}

#[derive(Error, Debug)]
pub enum TeinteError {
    #[error(transparent)]
    ColorParse(#[from] ColorParseError),

    #[error(transparent)]
    Decorate(#[from] DecorateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ColorParseError, DecorateError);
