//! Общие типы и утилиты для rustlex

pub mod error;

pub use error::{Error, Result};
