use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// An input that a formula cannot be evaluated on.
///
/// Raised instead of letting a division by zero or an out-of-range value leak into a result.
#[derive(Error, Debug)]
#[error("invalid input: {message}")]
pub struct InvalidInputError {
    message: String,
}

impl InvalidInputError {
    /// Constructs a new invalid input error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidInputError`].
#[track_caller]
pub fn invalid_input_error<M>(message: M) -> Error
where
    M: Display,
{
    InvalidInputError::new(message).wrap_error()
}

/// Checks if the error was caused by an [`InvalidInputError`], at any depth of context.
pub fn is_invalid_input(error: &Error) -> bool {
    error.downcast_ref::<InvalidInputError>().is_some()
}

/// Checks if the error was caused by a [`NotFoundError`], at any depth of context.
pub fn is_not_found(error: &Error) -> bool {
    error.downcast_ref::<NotFoundError>().is_some()
}
