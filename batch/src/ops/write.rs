//! Batch write - applies an attribute source to a target object.

use attrkit_core::{AttrError, AttrObject, AttrResult, Attributes};

use crate::source::AttrSource;

/// Write every (name, value) entry of the source onto the object.
///
/// Entries are applied in the source's iteration order. There is no
/// atomicity across entries: if a write fails, earlier writes remain
/// applied and the error propagates immediately.
pub fn set_attrs<O, S>(obj: &mut O, source: S) -> AttrResult<()>
where
    O: AttrObject,
    S: Into<AttrSource>,
{
    for (name, value) in source.into() {
        obj.set_attr(&name, value)?;
    }
    Ok(())
}

/// Write every entry of the source, returning a snapshot of the values
/// each attribute held immediately before its write.
///
/// Replaying the snapshot through [`set_attrs`] undoes the change. A name
/// absent before its write fails with `AttributeNotFound`; entries already
/// processed stay written, matching the no-atomicity rule of [`set_attrs`].
pub fn save_attrs<O, S>(obj: &mut O, source: S) -> AttrResult<Attributes>
where
    O: AttrObject,
    S: Into<AttrSource>,
{
    let mut snapshot = Attributes::new();
    for (name, value) in source.into() {
        let previous = obj
            .get_attr(&name)
            .cloned()
            .ok_or_else(|| AttrError::not_found(name.as_str()))?;
        obj.set_attr(&name, value)?;
        snapshot.insert(name, previous);
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::get_attrs;
    use attrkit_core::{attrs, DynObject, Value};

    #[test]
    fn test_set_attrs_map_form() {
        let mut obj = DynObject::new();
        set_attrs(&mut obj, attrs! { "a" => 1i64, "b" => 2i64 }).unwrap();
        assert_eq!(obj.get_attr("a"), Some(&Value::Int(1)));
        assert_eq!(obj.get_attr("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_set_attrs_pair_form_matches_map_form() {
        let mut by_map = DynObject::new();
        set_attrs(&mut by_map, attrs! { "a" => 1i64, "b" => 2i64 }).unwrap();

        let mut by_pairs = DynObject::new();
        set_attrs(
            &mut by_pairs,
            vec![("a", Value::Int(1)), ("b", Value::Int(2))],
        )
        .unwrap();

        assert_eq!(by_map, by_pairs);
    }

    #[test]
    fn test_set_attrs_touches_only_named_slots() {
        let mut obj = DynObject::with_attrs(attrs! { "keep" => "original", "x" => 0i64 });
        set_attrs(&mut obj, attrs! { "x" => 9i64 }).unwrap();
        assert_eq!(obj.get_attr("keep").unwrap().as_str(), Some("original"));
        assert_eq!(obj.get_attr("x"), Some(&Value::Int(9)));
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn test_save_attrs_returns_prior_values() {
        let mut obj = DynObject::with_attrs(attrs! { "x" => "old" });
        let snapshot = save_attrs(&mut obj, attrs! { "x" => "new" }).unwrap();

        assert_eq!(snapshot, attrs! { "x" => "old" });
        assert_eq!(obj.get_attr("x").unwrap().as_str(), Some("new"));
    }

    #[test]
    fn test_save_attrs_snapshot_replays_as_undo() {
        let mut obj = DynObject::with_attrs(attrs! { "x" => "old", "y" => 1i64 });
        let snapshot = save_attrs(&mut obj, attrs! { "x" => "new", "y" => 2i64 }).unwrap();

        set_attrs(&mut obj, snapshot).unwrap();
        let restored = get_attrs(&obj, &["x", "y"]).unwrap();
        assert_eq!(restored, attrs! { "x" => "old", "y" => 1i64 });
    }

    #[test]
    fn test_save_attrs_missing_name_fails() {
        let mut obj = DynObject::with_attrs(attrs! { "present" => 1i64 });
        let err = save_attrs(&mut obj, attrs! { "absent" => 2i64 }).unwrap_err();
        assert_eq!(err, AttrError::not_found("absent"));
        // Nothing was written for the failed entry
        assert!(!obj.has_attr("absent"));
    }

    #[test]
    fn test_save_attrs_partial_failure_keeps_earlier_writes() {
        let mut obj = DynObject::with_attrs(attrs! { "a" => 1i64 });
        let err = save_attrs(
            &mut obj,
            vec![("a", Value::Int(10)), ("missing", Value::Int(20))],
        )
        .unwrap_err();

        assert_eq!(err, AttrError::not_found("missing"));
        assert_eq!(obj.get_attr("a"), Some(&Value::Int(10)));
    }
}
