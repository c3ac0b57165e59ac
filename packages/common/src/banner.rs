use serde::{Deserialize, Serialize};

use crate::draft::FieldValue;
use crate::record::{Record, RecordId, null_as_default};
use crate::resource::{
    Endpoints, Messages, ResourceDescriptor, ResourceKind, StatusLabels, ToggleStyle,
};

/// Promotional banner. A banner is nothing but its image and a visibility flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Banner,
    singular: "banner",
    title: "Banner Management",
    total_label: "Total Banners",
    fields: &[],
    file_field: "image_url",
    show_id: true,
    endpoints: Endpoints {
        list: "/all",
        create: "/add",
        update: Some("/update/{id}"),
        delete: "/delete/{id}",
        toggle: None,
    },
    toggle: Some(ToggleStyle::UpdateFlag),
    has_edit: false,
    status: Some(StatusLabels {
        active: "Live",
        inactive: "Hidden",
        hide_action: "Hide",
        show_action: "Show",
    }),
    messages: Messages {
        created: "Banner uploaded",
        create_failed: "Failed to upload banner",
        updated: "Banner updated",
        update_failed: "Failed to update banner",
        confirm_delete: "Delete this banner?",
        deleted: "Banner deleted",
        delete_failed: "Failed to delete banner",
        toggle_failed: "Failed to update banner",
        image_missing: "Please select an image",
    },
};

impl Record for Banner {
    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn image_url(&self) -> Option<&str> {
        Some(self.image_url.as_str()).filter(|url| !url.is_empty())
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }
}
