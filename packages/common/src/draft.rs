use serde_json::{Map, Value};
use thiserror::Error;

use crate::resource::{FieldKind, ResourceDescriptor};
use crate::slug::slugify;

/// Value held by one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Empty value for a field of the given kind.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::List => Self::List(Vec::new()),
            FieldKind::Text | FieldKind::LongText | FieldKind::Slug => Self::Text(String::new()),
        }
    }

    /// Whitespace-only text and empty lists count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }

    fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::List(_), FieldKind::List)
                | (
                    Self::Text(_),
                    FieldKind::Text | FieldKind::LongText | FieldKind::Slug
                )
        )
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{resource} has no field named '{field}'")]
    UnknownField {
        resource: &'static str,
        field: String,
    },

    #[error("field '{field}' does not accept that kind of value")]
    KindMismatch { field: &'static str },
}

/// In-progress, unsaved values for one record.
///
/// Values are stored in descriptor field order.
#[derive(Debug, Clone)]
pub struct Draft {
    descriptor: &'static ResourceDescriptor,
    values: Vec<FieldValue>,
}

impl Draft {
    pub fn new(descriptor: &'static ResourceDescriptor) -> Self {
        Self {
            descriptor,
            values: descriptor
                .fields
                .iter()
                .map(|f| FieldValue::empty(f.kind))
                .collect(),
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.descriptor
            .field_index(name)
            .map(|index| &self.values[index])
    }

    /// Replace a field's value. The value must match the field kind.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), DraftError> {
        let index = self.index_of(name)?;
        let spec = &self.descriptor.fields[index];
        if !value.matches(spec.kind) {
            return Err(DraftError::KindMismatch { field: spec.name });
        }
        self.values[index] = value;
        Ok(())
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<(), DraftError> {
        self.set(name, FieldValue::Text(value.into()))
    }

    /// Append a trimmed item to a list field. Blank input is ignored and
    /// reported as `false`.
    pub fn push_item(&mut self, name: &str, value: &str) -> Result<bool, DraftError> {
        let items = self.list_mut(name)?;
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        items.push(value.to_string());
        Ok(true)
    }

    /// Remove the item at `index` from a list field, keeping the order of
    /// the rest. Out-of-range indices leave the list untouched.
    pub fn remove_item(&mut self, name: &str, index: usize) -> Result<(), DraftError> {
        let items = self.list_mut(name)?;
        *items = items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Ok(())
    }

    /// Labels of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.descriptor
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| spec.required && value.is_blank())
            .map(|(spec, _)| spec.label)
            .collect()
    }

    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(FieldValue::is_blank)
    }

    /// Build the request payload. Slug fields are slugified here.
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        for (spec, value) in self.descriptor.fields.iter().zip(&self.values) {
            let encoded = match (spec.kind, value) {
                (FieldKind::Slug, FieldValue::Text(text)) => Value::String(slugify(text)),
                (_, FieldValue::Text(text)) => Value::String(text.clone()),
                (_, FieldValue::List(items)) => {
                    Value::Array(items.iter().cloned().map(Value::String).collect())
                }
            };
            payload.insert(spec.name, encoded);
        }
        payload
    }

    fn index_of(&self, name: &str) -> Result<usize, DraftError> {
        self.descriptor
            .field_index(name)
            .ok_or_else(|| DraftError::UnknownField {
                resource: self.descriptor.singular,
                field: name.to_string(),
            })
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut Vec<String>, DraftError> {
        let index = self.index_of(name)?;
        let field = self.descriptor.fields[index].name;
        match &mut self.values[index] {
            FieldValue::List(items) => Ok(items),
            FieldValue::Text(_) => Err(DraftError::KindMismatch { field }),
        }
    }
}

/// Field name to value mapping sent to the backend. Insertion order is kept
/// so multipart parts go out in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object body.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        Value::Object(map)
    }

    /// Text parts for a multipart body: strings are sent raw, anything else
    /// (lists, booleans) as its JSON encoding.
    pub fn form_parts(&self) -> impl Iterator<Item = (&str, String)> {
        self.entries.iter().map(|(name, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.as_str(), text)
        })
    }
}
