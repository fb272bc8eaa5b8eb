//! Toolbox Text - case transformations and text statistics
//!
//! Pure string-in, value-out helpers. All functions are total: any input
//! produces a result, so there is no error type here.

mod count;
mod transform;

pub use count::{analyze, TextStats};
pub use transform::{camel_case, kebab_case, lower, snake_case, title_case, upper};
