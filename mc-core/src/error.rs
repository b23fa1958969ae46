//! Error types returned at the core's boundaries (PRNG entry points, region
//! driver). The layer pipeline itself never fails once a layer tree has been
//! constructed and its world seed initialized: every `get_area` call is total
//! over any rectangle.

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("unknown world type identifier: {0}")]
    InvalidWorldType(i32),
}

pub type CoreResult<T> = Result<T, CoreError>;
