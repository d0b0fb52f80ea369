//! Attrkit Core Types
//!
//! This crate provides the foundational types used throughout attrkit:
//! - Value types (the Value enum covering the kinds an attribute slot holds)
//! - The Attributes map alias and the `attrs!` construction macro
//! - The AttrObject capability trait over a named-attribute namespace
//! - Common error types

mod error;
mod object;
mod value;

pub use error::*;
pub use object::*;
pub use value::*;
