//! AttrSource - the tagged calling-convention type.
//!
//! A batch write accepts its attributes in one of the equivalent positional
//! forms (ordered pair sequence, or map) or as named entries built with the
//! `attrs!` macro. Each form converts into an `AttrSource`; supplying more
//! than one form at once is unrepresentable through the `From` impls, and
//! `from_parts` covers callers that arbitrate forms at runtime.

use attrkit_core::{AttrError, AttrResult, Attributes, Value};

/// The resolved set of attributes a batch write applies.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrSource {
    /// Ordered (name, value) pairs; applied in the supplied order.
    Pairs(Vec<(String, Value)>),
    /// Mapping form; applied in map iteration order. Order across distinct
    /// names does not affect the resulting object state.
    Map(Attributes),
}

impl AttrSource {
    /// Arbitrate between a positional source and named attributes.
    ///
    /// Mirrors the runtime contract for callers assembling arguments
    /// dynamically: exactly one of the two must be supplied, otherwise the
    /// call fails with `InvalidArgument`.
    pub fn from_parts(
        positional: Option<AttrSource>,
        named: Option<Attributes>,
    ) -> AttrResult<AttrSource> {
        match (positional, named) {
            (Some(source), None) => Ok(source),
            (None, Some(named)) => Ok(AttrSource::Map(named)),
            (Some(_), Some(_)) => Err(AttrError::InvalidArgument(
                "specify attrs via either a positional source or named entries, not both".into(),
            )),
            (None, None) => Err(AttrError::InvalidArgument(
                "no attributes supplied: give a positional source or named entries".into(),
            )),
        }
    }

    /// Number of entries in this source.
    pub fn len(&self) -> usize {
        match self {
            AttrSource::Pairs(pairs) => pairs.len(),
            AttrSource::Map(map) => map.len(),
        }
    }

    /// Returns true if this source names no attributes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the attribute names in iteration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            AttrSource::Pairs(pairs) => pairs.iter().map(|(name, _)| name.as_str()).collect(),
            AttrSource::Map(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Consume the source, yielding (name, value) pairs in iteration order.
    pub fn into_pairs(self) -> Vec<(String, Value)> {
        match self {
            AttrSource::Pairs(pairs) => pairs,
            AttrSource::Map(map) => map.into_iter().collect(),
        }
    }
}

impl IntoIterator for AttrSource {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_pairs().into_iter()
    }
}

impl From<Vec<(String, Value)>> for AttrSource {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        AttrSource::Pairs(pairs)
    }
}

impl From<Vec<(&str, Value)>> for AttrSource {
    fn from(pairs: Vec<(&str, Value)>) -> Self {
        AttrSource::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

impl From<Attributes> for AttrSource {
    fn from(map: Attributes) -> Self {
        AttrSource::Map(map)
    }
}
