//! Attrkit Batch Operations
//!
//! Bulk manipulation of an object's named attributes: read many, write many,
//! write-with-snapshot, delete many.
//!
//! Responsibilities:
//! - Resolve the equivalent calling conventions into one attribute source
//! - Apply reads/writes/deletes in order with no cross-entry atomicity
//! - Capture prior values so a batch write can be undone
//!
//! # Module Structure
//!
//! - `source` - AttrSource, the tagged calling-convention type
//! - `ops/` - Individual operation implementations (read, write, delete)

mod ops;
mod source;

pub use ops::{del_attrs, get_attrs, save_attrs, set_attrs, OnMissing};
pub use source::AttrSource;

pub use attrkit_core::{attrs, AttrError, AttrObject, AttrResult, Attributes, DynObject, Value};
