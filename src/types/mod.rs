pub mod candidate;
pub mod query;
pub mod resolution;
pub mod ring;
