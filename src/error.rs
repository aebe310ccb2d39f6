//! Failures raised by terminal and adapter operations.

#[cfg(test)] use strum::EnumDiscriminants;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(EnumDiscriminants))]
#[cfg_attr(test, strum_discriminants(name(ErrorKind)))]
pub enum Error {
    #[error("operation requires at least one element, but the sequence was empty")]
    EmptySequence,
    #[error("elements are not mutually comparable")]
    TypeMismatch,
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("chunk or window size must be greater than zero")]
    ZeroSize,
}

pub type Result<T> = std::result::Result<T, Error>;
