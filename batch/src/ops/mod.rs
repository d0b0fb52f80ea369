//! Batch operation implementations.

mod delete;
mod read;
mod write;

pub use delete::{del_attrs, OnMissing};
pub use read::get_attrs;
pub use write::{save_attrs, set_attrs};
