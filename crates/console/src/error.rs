//! Console-level errors.
//!
//! Bad user input is not an error at this level: it travels as a
//! `DomainError` inside `Ok` so handlers can report it and ask again.

use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream reached end-of-file. Ends the session in an orderly way.
    #[error("input stream closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
