pub mod dimension;
pub mod value;

pub use dimension::*;
pub use value::*;
