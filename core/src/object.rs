//! Target-object capability for named attribute access.
//!
//! The batch operations never own the objects they act on; they only need a
//! way to read, write, and delete slots by name. `AttrObject` is that
//! capability. `DynObject` is the open map-backed implementation, and a bare
//! `Attributes` map works as a target too.

use crate::{AttrResult, Attributes, Value};

/// A value with a mutable, named-attribute namespace.
pub trait AttrObject {
    /// Get an attribute value by name.
    fn get_attr(&self, name: &str) -> Option<&Value>;

    /// Set an attribute value, creating the slot if it does not exist.
    ///
    /// Writes are fallible so that targets with constrained namespaces can
    /// reject them; the open implementations in this crate never do.
    fn set_attr(&mut self, name: &str, value: Value) -> AttrResult<()>;

    /// Remove an attribute, returning its previous value if it was present.
    fn del_attr(&mut self, name: &str) -> Option<Value>;

    /// Returns true if the named attribute currently exists.
    fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }
}

/// An open object whose attributes live in a map.
///
/// This is the stand-in for a host runtime's dynamically-attributed object:
/// any name can be set, read back, and deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynObject {
    attributes: Attributes,
}

impl DynObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object holding the given attributes.
    pub fn with_attrs(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Number of attributes currently set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over (name, value) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the object, yielding its attribute map.
    pub fn into_attrs(self) -> Attributes {
        self.attributes
    }
}

impl AttrObject for DynObject {
    fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    fn set_attr(&mut self, name: &str, value: Value) -> AttrResult<()> {
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    fn del_attr(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }
}

impl From<Attributes> for DynObject {
    fn from(attributes: Attributes) -> Self {
        Self::with_attrs(attributes)
    }
}

/// A bare attribute map is itself a valid target.
impl AttrObject for Attributes {
    fn get_attr(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn set_attr(&mut self, name: &str, value: Value) -> AttrResult<()> {
        self.insert(name.to_string(), value);
        Ok(())
    }

    fn del_attr(&mut self, name: &str) -> Option<Value> {
        self.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_dyn_object_get_set_del() {
        let mut obj = DynObject::new();
        assert!(obj.is_empty());
        assert!(!obj.has_attr("name"));

        obj.set_attr("name", Value::from("Alice")).unwrap();
        assert_eq!(obj.get_attr("name"), Some(&Value::String("Alice".into())));
        assert_eq!(obj.len(), 1);

        // Overwrite keeps a single slot
        obj.set_attr("name", Value::from("Bob")).unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get_attr("name").unwrap().as_str(), Some("Bob"));

        assert_eq!(obj.del_attr("name"), Some(Value::String("Bob".into())));
        assert_eq!(obj.del_attr("name"), None);
    }

    #[test]
    fn test_with_attrs() {
        let obj = DynObject::with_attrs(attrs! { "a" => 1i64, "b" => true });
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get_attr("a"), Some(&Value::Int(1)));
        assert_eq!(obj.iter().count(), 2);
        assert_eq!(obj.clone().into_attrs(), attrs! { "a" => 1i64, "b" => true });
    }

    #[test]
    fn test_attributes_map_as_target() {
        let mut map: Attributes = attrs! { "x" => 1i64 };
        assert!(map.has_attr("x"));
        map.set_attr("y", Value::Int(2)).unwrap();
        assert_eq!(map.del_attr("x"), Some(Value::Int(1)));
        assert_eq!(map.get_attr("y"), Some(&Value::Int(2)));
    }
}
