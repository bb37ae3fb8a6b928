mod book_store;
mod errors;

pub use book_store::{BookStore, ServiceDependencies};
pub use errors::{BookApplicationError, Result};
