use serde::{Deserialize, Serialize};

use crate::draft::FieldValue;
use crate::record::{Record, RecordId, null_as_default};
use crate::resource::{
    Endpoints, FieldKind, FieldSpec, Messages, ResourceDescriptor, ResourceKind, StatusLabels,
    ToggleStyle,
};

/// Blog post. `fullContent` keeps its camelCase wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "fullContent", default, deserialize_with = "null_as_default")]
    pub full_content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Blog,
    singular: "blog",
    title: "Blog Management",
    total_label: "Total Articles",
    fields: &[
        FieldSpec {
            name: "title",
            label: "Blog Title",
            kind: FieldKind::Text,
            required: true,
            column: Some("Title"),
            truncate: None,
        },
        FieldSpec {
            name: "slug",
            label: "URL Slug",
            kind: FieldKind::Slug,
            required: true,
            column: None,
            truncate: None,
        },
        FieldSpec {
            name: "description",
            label: "Short Description",
            kind: FieldKind::LongText,
            required: true,
            column: Some("Description"),
            truncate: Some(80),
        },
        FieldSpec {
            name: "fullContent",
            label: "Full Blog Content",
            kind: FieldKind::LongText,
            required: true,
            column: None,
            truncate: None,
        },
    ],
    file_field: "image",
    show_id: false,
    endpoints: Endpoints {
        list: "/",
        create: "/create",
        update: Some("/{id}"),
        delete: "/{id}",
        toggle: Some("/{id}"),
    },
    toggle: Some(ToggleStyle::Patch),
    has_edit: true,
    status: Some(StatusLabels {
        active: "Public",
        inactive: "Draft",
        hide_action: "Hide",
        show_action: "Show",
    }),
    messages: Messages {
        created: "Blog published successfully!",
        create_failed: "Error creating blog",
        updated: "Blog updated successfully!",
        update_failed: "Error updating blog",
        confirm_delete: "Are you sure you want to delete this blog?",
        deleted: "Blog deleted",
        delete_failed: "Failed to delete blog",
        toggle_failed: "Failed to change blog visibility",
        image_missing: "Please upload a blog cover image",
    },
};

impl Record for Blog {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let text = match name {
            "title" => &self.title,
            "slug" => &self.slug,
            "description" => &self.description,
            "fullContent" => &self.full_content,
            _ => return None,
        };
        Some(FieldValue::Text(text.clone()))
    }
}
