pub mod capability;
pub mod error;
pub mod form_state;
pub mod list_state;
pub mod notice;
pub mod row;
pub mod shell;
pub mod view;

pub use capability::{AlwaysConfirm, Confirm, InMemoryObjectUrls, ObjectUrls, ScriptedConfirm};
pub use error::{AdminError, FormError};
pub use form_state::{FormState, SubmitMode, SubmitRequest};
pub use list_state::ListState;
pub use notice::{Notice, NoticeLevel};
pub use row::{Cell, CellValue, Row, RowAction, columns, render};
pub use shell::{NavItem, Navigation, Outlet, ROUTES, Route, resolve};
pub use view::{Action, AdminView, Command, Phase, ViewState};
