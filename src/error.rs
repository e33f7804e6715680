use std::io;

use thiserror::Error;

/// Failures of the `utf8chars` command line. Text processing itself never
/// fails; ill-formed input is substituted instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no input files")]
    NoInput,
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("failed to write report")]
    Output(#[from] io::Error),
}
