//! Dynamic SObject record.
//!
//! An [`SObject`] is a type name plus a map of field values. It is used both
//! to build create/update bodies and to hold records parsed from responses.
//! The record knows nothing about the remote schema.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// Field holding the record id in Salesforce payloads.
pub const ID_FIELD: &str = "Id";

/// An untyped field value.
///
/// Objects and arrays (e.g. the `attributes` block of a fetched record) are
/// kept as opaque [`FieldValue::Nested`] values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(Number),
    Boolean(bool),
    /// Explicit JSON `null`, distinct from an absent field.
    Null,
    Nested(Value),
}

impl FieldValue {
    /// String content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content as f64, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Numeric content as i64, if this is an integral number.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert back into a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::Null => Value::Null,
            FieldValue::Nested(v) => v.clone(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s),
            Value::Number(n) => FieldValue::Number(n),
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Null => FieldValue::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Nested(nested),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value.into())
    }
}

/// NaN and infinities have no JSON form and become [`FieldValue::Null`].
impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(FieldValue::Null, FieldValue::Number)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => n.serialize(serializer),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Nested(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FieldValue::from)
    }
}

/// A record of any SObject type.
///
/// Serializes as a JSON object of its fields only; the type name travels in
/// the URL path.
///
/// # Example
///
/// ```rust
/// use sobjects_rest::SObject;
///
/// let mut account = SObject::new("Account").unwrap();
/// account.set_string("Name", "Acme");
/// account.set_number("NumberOfEmployees", 250.0);
/// account.set_bool("IsPartner", true);
///
/// assert_eq!(account.get_field("Name").and_then(|v| v.as_str()), Some("Acme"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SObject {
    sobject_type: String,
    fields: HashMap<String, FieldValue>,
}

impl SObject {
    /// Create an empty record of the given type.
    pub fn new(sobject_type: impl Into<String>) -> Result<Self> {
        let sobject_type = sobject_type.into();
        if sobject_type.is_empty() {
            return Err(Error::invalid_argument("SObject type name must not be empty"));
        }
        Ok(Self {
            sobject_type,
            fields: HashMap::new(),
        })
    }

    /// Parse a record from JSON object text.
    pub fn from_json(sobject_type: impl Into<String>, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => Self::from_map(sobject_type, map),
            other => Err(Error::parse(format!(
                "expected a JSON object for an SObject, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build a record from an already parsed JSON object.
    pub fn from_map(sobject_type: impl Into<String>, map: Map<String, Value>) -> Result<Self> {
        let mut record = Self::new(sobject_type)?;
        record.fields = map
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from(value)))
            .collect();
        Ok(record)
    }

    /// Build a query/search record typed by its `attributes.type`.
    pub fn from_attributed(map: Map<String, Value>) -> Result<Self> {
        let sobject_type = map
            .get("attributes")
            .and_then(|attrs| attrs.get("type"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::parse("record is missing attributes.type"))?;
        Self::from_map(sobject_type, map)
    }

    /// The SObject type name, e.g. `Account`.
    pub fn sobject_type(&self) -> &str {
        &self.sobject_type
    }

    /// Record id from the `Id` field, if set to a non-empty string.
    ///
    /// Field names are case-insensitive on the API side, so `id` or `ID`
    /// count too.
    pub fn id(&self) -> Option<&str> {
        self.fields
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(ID_FIELD))
            .find_map(|(_, value)| value.as_str().filter(|id| !id.is_empty()))
    }

    /// Insert or overwrite a field.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_field(name, FieldValue::String(value.into()));
    }

    /// Set a numeric field.
    ///
    /// NaN and infinities have no JSON form and are stored as `null`, which
    /// clears the remote field on update. Use
    /// [`try_set_number`](Self::try_set_number) to reject them instead.
    pub fn set_number(&mut self, name: impl Into<String>, value: f64) {
        self.set_field(name, value);
    }

    /// Set a numeric field, failing with `InvalidArgument` for NaN or infinity.
    pub fn try_set_number(&mut self, name: impl Into<String>, value: f64) -> Result<()> {
        let name = name.into();
        let number = Number::from_f64(value).ok_or_else(|| {
            Error::invalid_argument(format!("{name} is not a finite number: {value}"))
        })?;
        self.set_field(name, FieldValue::Number(number));
        Ok(())
    }

    pub fn set_bool(&mut self, name: impl Into<String>, value: bool) {
        self.set_field(name, value);
    }

    /// Set a field to an explicit `null`, which clears it on update.
    pub fn set_null(&mut self, name: impl Into<String>) {
        self.set_field(name, FieldValue::Null);
    }

    /// Overwrite-union the given fields into this record.
    pub fn merge_fields<I, K, V>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (name, value) in fields {
            self.set_field(name, value);
        }
    }

    /// Remove a field, returning its value.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Names of the fields currently set.
    pub fn field_names(&self) -> HashSet<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Look up a field; `None` when not present.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// All fields.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize the fields as JSON object text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Serialize the fields as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_value()))
                .collect(),
        )
    }

    /// Serialize every field except the ones named in `skip`, compared
    /// case-insensitively.
    pub(crate) fn to_json_without(&self, skip: &[&str]) -> Result<String> {
        let body: HashMap<&str, &FieldValue> = self
            .fields
            .iter()
            .filter(|(name, _)| !skip.iter().any(|s| name.eq_ignore_ascii_case(s)))
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        serde_json::to_string(&body).map_err(Into::into)
    }
}

impl Serialize for SObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
