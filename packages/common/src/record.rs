use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::draft::FieldValue;
use crate::resource::ResourceDescriptor;

/// Server-assigned record identifier.
///
/// The backend may hand out integer or string ids; both are kept as their
/// textual form and only ever formatted into URLs. Identity is the text;
/// whether the id arrived as a number only affects how it is written back.
#[derive(Debug, Clone)]
pub struct RecordId {
    text: String,
    numeric: bool,
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn text(id: impl Into<String>) -> Self {
        Self {
            text: id.into(),
            numeric: false,
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self {
            text: id.to_string(),
            numeric: true,
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::text(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::text(id)
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::text(s.trim()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(id) => Self::from(id),
            RawId::Text(id) => Self::text(id),
        })
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.text.parse::<i64>() {
            Ok(id) if self.numeric => serializer.serialize_i64(id),
            _ => serializer.serialize_str(&self.text),
        }
    }
}

/// Read a field whose `null` means the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A server-owned record managed by one admin page.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Static description of the resource this record belongs to.
    fn descriptor() -> &'static ResourceDescriptor;

    fn id(&self) -> &RecordId;

    /// Public URL of the stored image, if the server has one.
    fn image_url(&self) -> Option<&str>;

    /// Visibility flag for resources that can be toggled.
    fn is_active(&self) -> Option<bool> {
        None
    }

    /// Current value of a descriptor field, used to prefill edit forms and
    /// render table cells.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
