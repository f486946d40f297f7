pub mod error;
pub mod index;
pub mod resolver;
