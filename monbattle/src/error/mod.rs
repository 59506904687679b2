mod context;
mod error;
mod monbattle_error;

pub use anyhow::{
    Error,
    Result,
};
pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use monbattle_error::{
    GeneralError,
    InvalidInputError,
    NotFoundError,
    general_error,
    invalid_input_error,
    is_invalid_input,
    is_not_found,
    not_found_error,
};
