pub mod error;
mod simplify;
mod validate;

pub use simplify::simplify;
pub use validate::{is_ccw, validate};
