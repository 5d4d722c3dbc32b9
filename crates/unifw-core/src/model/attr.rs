// ── Three-valued optionality ──
//
// Mirrors the state layer's attribute values: a field is either unset,
// not yet known (computed by the controller), or known. A known value may
// itself be empty; presence is decided by the marker, never the content.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional local attribute with an explicit "unknown" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attr<T> {
    /// Not configured.
    #[default]
    Null,
    /// Configured, but the value is only known after apply.
    Unknown,
    /// Known value (may be empty).
    Value(T),
}

impl<T> Attr<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The known value, if any. `Null` and `Unknown` both yield `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::Unknown => None,
        }
    }
}

impl<T: Clone + Default> Attr<T> {
    /// Known value or the type's zero value.
    pub fn value_or_default(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Attr<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Self::Value)
    }
}

// Config documents have no way to spell "unknown"; it encodes as null.
impl<T: Serialize> Serialize for Attr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Null | Self::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Attr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_known_not_null() {
        let attr = Attr::Value(String::new());
        assert!(!attr.is_null());
        assert_eq!(attr.value().map(String::as_str), Some(""));
    }

    #[test]
    fn unknown_has_no_value() {
        let attr: Attr<i32> = Attr::Unknown;
        assert_eq!(attr.value(), None);
        assert_eq!(attr.value_or_default(), 0);
    }

    #[test]
    fn serde_maps_null_both_ways() {
        let attr: Attr<String> = serde_json::from_str("null").unwrap();
        assert!(attr.is_null());

        let attr: Attr<String> = serde_json::from_str(r#""tcp""#).unwrap();
        assert_eq!(attr, Attr::Value("tcp".into()));

        assert_eq!(serde_json::to_string(&Attr::<bool>::Unknown).unwrap(), "null");
    }
}
