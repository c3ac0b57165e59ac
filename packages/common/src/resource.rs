use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{banner, blog, service};

/// The content types managed by the admin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Banner,
    Service,
    Blog,
}

impl ResourceKind {
    /// All resources, in navigation order.
    pub const ALL: &'static [ResourceKind] = &[Self::Banner, Self::Service, Self::Blog];

    /// Plural lowercase name, used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banners",
            Self::Service => "services",
            Self::Blog => "blogs",
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        match self {
            Self::Banner => &banner::DESCRIPTOR,
            Self::Service => &service::DESCRIPTOR,
            Self::Blog => &blog::DESCRIPTOR,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResourceError {
    invalid: String,
}

impl fmt::Display for ParseResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown resource '{}'. Valid values: {}",
            self.invalid,
            ResourceKind::ALL
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseResourceError {}

impl FromStr for ResourceKind {
    type Err = ParseResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "banner" | "banners" => Ok(Self::Banner),
            "service" | "services" => Ok(Self::Service),
            "blog" | "blogs" => Ok(Self::Blog),
            _ => Err(ParseResourceError {
                invalid: s.to_string(),
            }),
        }
    }
}

/// How a draft field is edited and encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text (description, article body).
    LongText,
    /// Ordered list of strings, JSON-encoded when sent as a form part.
    List,
    /// Free text that is slugified when the payload is built.
    Slug,
}

/// One editable field of a resource.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Wire name, part of the backend contract.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Table column header; `None` keeps the field out of the table.
    pub column: Option<&'static str>,
    /// Maximum characters shown in the table before an ellipsis.
    pub truncate: Option<usize>,
}

/// Endpoint paths relative to the resource base URL. `{id}` is substituted.
#[derive(Clone, Copy, Debug)]
pub struct Endpoints {
    pub list: &'static str,
    pub create: &'static str,
    pub update: Option<&'static str>,
    pub delete: &'static str,
    pub toggle: Option<&'static str>,
}

impl Endpoints {
    /// Expand an endpoint template for a concrete id.
    pub fn expand(template: &str, id: &str) -> String {
        template.replace("{id}", id)
    }
}

/// How the visibility flag of a record is flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleStyle {
    /// PATCH on the toggle endpoint with an empty body; the server flips it.
    Patch,
    /// PUT on the update endpoint carrying `image_url` and the negated flag.
    UpdateFlag,
}

/// Two-valued status labels for toggleable resources.
#[derive(Clone, Copy, Debug)]
pub struct StatusLabels {
    pub active: &'static str,
    pub inactive: &'static str,
    /// Toggle button caption while the record is active.
    pub hide_action: &'static str,
    /// Toggle button caption while the record is hidden.
    pub show_action: &'static str,
}

impl StatusLabels {
    pub fn status(&self, active: bool) -> &'static str {
        if active { self.active } else { self.inactive }
    }

    pub fn toggle_action(&self, active: bool) -> &'static str {
        if active {
            self.hide_action
        } else {
            self.show_action
        }
    }
}

/// User-facing notice texts.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub confirm_delete: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub toggle_failed: &'static str,
    pub image_missing: &'static str,
}

/// Capability descriptor for one resource: its fields, endpoints and which
/// row actions it supports.
#[derive(Clone, Copy, Debug)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    /// Lowercase singular noun ("banner").
    pub singular: &'static str,
    /// Page title ("Banner Management").
    pub title: &'static str,
    /// Label of the record counter ("Total Banners").
    pub total_label: &'static str,
    pub fields: &'static [FieldSpec],
    /// Multipart part name carrying the image.
    pub file_field: &'static str,
    /// Render the record id as the first table column.
    pub show_id: bool,
    pub endpoints: Endpoints,
    pub toggle: Option<ToggleStyle>,
    /// Whether records can be loaded back into the form and updated.
    pub has_edit: bool,
    pub status: Option<StatusLabels>,
    pub messages: Messages,
}

impl ResourceDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_singular_and_plural() {
        assert_eq!("banners".parse::<ResourceKind>().unwrap(), ResourceKind::Banner);
        assert_eq!("Service".parse::<ResourceKind>().unwrap(), ResourceKind::Service);
        assert_eq!(" blog ".parse::<ResourceKind>().unwrap(), ResourceKind::Blog);
        assert!("posts".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_descriptors_match_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.descriptor().kind, *kind);
        }
    }

    #[test]
    fn test_capabilities() {
        let banner = ResourceKind::Banner.descriptor();
        let service = ResourceKind::Service.descriptor();
        let blog = ResourceKind::Blog.descriptor();

        assert_eq!(banner.toggle, Some(ToggleStyle::UpdateFlag));
        assert!(!banner.has_edit);
        assert!(service.toggle.is_none());
        assert!(!service.has_edit);
        assert_eq!(blog.toggle, Some(ToggleStyle::Patch));
        assert!(blog.has_edit);
    }

    #[test]
    fn test_toggle_capable_resources_have_status_labels() {
        for kind in ResourceKind::ALL {
            let desc = kind.descriptor();
            assert_eq!(desc.has_toggle(), desc.status.is_some(), "{kind}");
        }
    }

    #[test]
    fn test_expand_endpoint() {
        assert_eq!(Endpoints::expand("/delete/{id}", "9"), "/delete/9");
        assert_eq!(Endpoints::expand("/all", "9"), "/all");
    }
}
