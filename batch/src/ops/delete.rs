//! Batch delete - removes named attributes with an explicit missing policy.

use attrkit_core::{AttrError, AttrObject, AttrResult};

/// Policy for names that are absent when deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    /// Propagate `AttributeNotFound` immediately; remaining names are not
    /// processed.
    Abort,
    /// Swallow the miss and continue with the next name.
    Skip,
}

/// Delete the named attributes from the object, in order.
pub fn del_attrs<O: AttrObject>(obj: &mut O, names: &[&str], on_missing: OnMissing) -> AttrResult<()> {
    for &name in names {
        if obj.del_attr(name).is_none() && on_missing == OnMissing::Abort {
            return Err(AttrError::not_found(name));
        }
    }
    Ok(())
}
