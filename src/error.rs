use std::io;

use thiserror::Error;

/// Failures that abort a run with a nonzero exit status.
///
/// An unknown operation keyword is deliberately not in here: it is
/// reported on stdout and the process still exits normally.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("not a number: {0:?}")]
    BadOperand(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
