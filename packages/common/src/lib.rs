pub mod attachment;
pub mod banner;
pub mod blog;
pub mod config;
pub mod draft;
pub mod record;
pub mod resource;
pub mod service;
pub mod slug;

pub use attachment::Attachment;
pub use banner::Banner;
pub use blog::Blog;
pub use draft::{Draft, DraftError, FieldValue, Payload};
pub use record::{Record, RecordId};
pub use resource::{
    Endpoints, FieldKind, FieldSpec, Messages, ResourceDescriptor, ResourceKind, StatusLabels,
    ToggleStyle,
};
pub use service::Service;
pub use slug::slugify;
