use std::io;

use thiserror::Error;

/// Failures at the edges of a pipeline. The step protocol itself has no
/// error channel; these come from sources that touch the outside world
/// and from checked constructors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 {
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("stride must be greater than zero")]
    ZeroStride,
}

pub type Result<T> = std::result::Result<T, Error>;
