//! Batch read - collects current values of named attributes.

use attrkit_core::{AttrError, AttrObject, AttrResult, Attributes};

/// Read the current values of the named attributes into a map.
///
/// Names are looked up in the given order; the first absent name fails the
/// whole call with `AttributeNotFound` and no result escapes.
pub fn get_attrs<O: AttrObject>(obj: &O, names: &[&str]) -> AttrResult<Attributes> {
    let mut result = Attributes::new();
    for &name in names {
        let value = obj
            .get_attr(name)
            .cloned()
            .ok_or_else(|| AttrError::not_found(name))?;
        result.insert(name.to_string(), value);
    }
    Ok(result)
}
