pub mod builder;
pub mod elements;

pub use elements::*;
