//! Convtab converts result-conversion expectation lines such as
//! `'true' (boolean) as SQL_C_SBIGINT: 1` into C++ table entries for a compiled
//! test suite.

pub use crate::errors::{ConvertError, Result};

pub mod cli;
pub mod convert;
pub mod errors;
pub mod syntax;
