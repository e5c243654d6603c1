//! Model layer - centralized state management
//!
//! - `ViewState` / `Route` - which page is showing and what it resolves to
//! - `DomainState` - the read-only catalog and the comment store
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod comment;
pub mod domain;
pub mod format;
pub mod modal;
pub mod settings;
pub mod ui;
pub mod upload;
pub mod video;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, SampleData};
pub use comment::{Comment, CommentStore};
pub use video::{User, Video};
pub use view::{resolve_route, Page, Route, ViewState};
