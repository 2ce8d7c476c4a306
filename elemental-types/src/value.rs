//! Setting values stored in a node's `settings` map.
//!
//! Elementor settings are an open bag of JSON values. They are modelled as a
//! closed sum type so the pipeline stages can pattern match instead of probing
//! untyped JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// An ordered settings map. Insertion order is kept through parse and print.
pub type Settings = IndexMap<String, SettingValue>;

/// A single settings value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<SettingValue>),
    Object(Settings),
}

impl SettingValue {
    /// Returns true for the primitive values treated as "unset": `null` and `""`.
    pub fn is_empty_primitive(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns true for `{}` and `[]`.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::Object(map) => map.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns true for an object that carries a `unit` key and nothing else
    /// of substance, e.g. `{"unit": "px", "size": ""}`.
    pub fn is_unit_only(&self) -> bool {
        match self {
            Self::Object(map) => {
                map.contains_key("unit")
                    && map
                        .iter()
                        .filter(|(key, _)| key.as_str() != "unit")
                        .all(|(_, value)| value.is_empty_primitive())
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Settings> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Settings> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[SettingValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` if this value is an object.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<SettingValue> for Value {
    fn from(value: SettingValue) -> Self {
        match value {
            SettingValue::Null => Value::Null,
            SettingValue::Bool(b) => Value::Bool(b),
            SettingValue::Number(n) => Value::Number(n),
            SettingValue::String(s) => Value::String(s),
            SettingValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            SettingValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Settings> for SettingValue {
    fn from(map: Settings) -> Self {
        Self::Object(map)
    }
}

impl Serialize for SettingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Typed view of Elementor's `{size, unit, sizes}` slider value.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    /// Either a number (`56`) or a CSS expression (`"120%"`).
    pub size: SettingValue,
    pub unit: String,
}

impl UnitValue {
    /// A pixel value, e.g. `{size: 16, unit: "px", sizes: []}`.
    pub fn px(size: i64) -> Self {
        Self {
            size: size.into(),
            unit: "px".into(),
        }
    }

    /// A free-form value with the `custom` unit, e.g. `"150%"`.
    pub fn custom(expr: &str) -> Self {
        Self {
            size: expr.into(),
            unit: "custom".into(),
        }
    }
}

impl From<UnitValue> for SettingValue {
    fn from(value: UnitValue) -> Self {
        let mut map = Settings::new();
        map.insert("size".into(), value.size);
        map.insert("unit".into(), SettingValue::String(value.unit));
        map.insert("sizes".into(), SettingValue::Array(Vec::new()));
        SettingValue::Object(map)
    }
}

/// Typed view of a four-sided dimension such as padding, border width or radius.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    pub top: SettingValue,
    pub right: SettingValue,
    pub bottom: SettingValue,
    pub left: SettingValue,
    pub unit: String,
    pub is_linked: bool,
}

impl BoxModel {
    /// The same numeric value on every side, linked.
    pub fn uniform(value: i64, unit: &str) -> Self {
        Self {
            top: value.into(),
            right: value.into(),
            bottom: value.into(),
            left: value.into(),
            unit: unit.into(),
            is_linked: true,
        }
    }

    /// Vertical/horizontal pair written as strings, the way Elementor's
    /// padding controls store them.
    pub fn symmetric(vertical: &str, horizontal: &str, unit: &str) -> Self {
        Self {
            top: vertical.into(),
            right: horizontal.into(),
            bottom: vertical.into(),
            left: horizontal.into(),
            unit: unit.into(),
            is_linked: false,
        }
    }
}

impl From<BoxModel> for SettingValue {
    fn from(value: BoxModel) -> Self {
        let mut map = Settings::new();
        map.insert("top".into(), value.top);
        map.insert("right".into(), value.right);
        map.insert("bottom".into(), value.bottom);
        map.insert("left".into(), value.left);
        map.insert("unit".into(), SettingValue::String(value.unit));
        map.insert("isLinked".into(), SettingValue::Bool(value.is_linked));
        SettingValue::Object(map)
    }
}
