//! Specification text storage: subject identifier validation and text loading

mod error;
mod fs_store;

pub use error::StoreError;
pub use fs_store::{FsSpecStore, SpecStore};
