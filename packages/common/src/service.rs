use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::draft::FieldValue;
use crate::record::{Record, RecordId, null_as_default};
use crate::resource::{Endpoints, FieldKind, FieldSpec, Messages, ResourceDescriptor, ResourceKind};

/// Service listing with an ordered list of feature points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Accept `points` as a JSON array, as a JSON-encoded array inside a string
/// (the form encoding), or as anything else, which reads as no points.
fn lenient_points<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().map(point_text).collect(),
        Some(Value::String(encoded)) => match serde_json::from_str::<Value>(&encoded) {
            Ok(Value::Array(items)) => items.into_iter().map(point_text).collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    })
}

fn point_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Service,
    singular: "service",
    title: "Manage Services",
    total_label: "Total Services",
    fields: &[
        FieldSpec {
            name: "title",
            label: "Service Title",
            kind: FieldKind::Text,
            required: true,
            column: Some("Title"),
            truncate: None,
        },
        FieldSpec {
            name: "description",
            label: "Description",
            kind: FieldKind::LongText,
            required: true,
            column: Some("Description"),
            truncate: None,
        },
        FieldSpec {
            name: "points",
            label: "Service Features",
            kind: FieldKind::List,
            required: false,
            column: Some("Features"),
            truncate: None,
        },
    ],
    file_field: "image_file",
    show_id: false,
    endpoints: Endpoints {
        list: "/all",
        create: "/add",
        update: None,
        delete: "/delete/{id}",
        toggle: None,
    },
    toggle: None,
    has_edit: false,
    status: None,
    messages: Messages {
        created: "Service Added!",
        create_failed: "Failed to add service",
        updated: "Service updated",
        update_failed: "Failed to update service",
        confirm_delete: "Delete service?",
        deleted: "Service deleted",
        delete_failed: "Failed to delete service",
        toggle_failed: "Failed to update service",
        image_missing: "Please select a service image",
    },
};

impl Record for Service {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "points" => Some(FieldValue::List(self.points.clone())),
            _ => None,
        }
    }
}
