pub mod book;
pub mod commands;
pub mod errors;
pub mod filter;
pub mod value_objects;

pub use book::*;
pub use commands::*;
pub use errors::*;
pub use filter::*;
pub use value_objects::*;
