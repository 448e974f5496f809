//! Value types.

mod color;
mod size;
mod value;

pub use color::{COLOR_FUNCTIONS, Color};
pub use size::Size;
pub use value::{CssFunction, Separator, Value, ValueList};
