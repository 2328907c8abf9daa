//! User Directory Core Library
//!
//! Framework-free logic shared by every user directory front-end:
//! - the list view-state machine (search, suggestions, pagination)
//! - the detail presenter (grouped display fields for one user)
//! - routes and the `Navigator` seam used for explicit navigation
//! - `DirectoryService`, which turns data source failures into the two
//!   user-facing error kinds
//!
//! Nothing in here performs I/O except `DirectoryService`, and that only
//! through the `UserSource` trait.

pub mod directory;
pub mod error;
pub mod presenter;
pub mod route;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use directory::{matches, ListViewState, UserDirectory, DEFAULT_PAGE_SIZE};
pub use error::{CoreError, CoreResult};
pub use presenter::{present, DetailSection, DetailView, DisplayField, FieldLabel};
pub use route::{Navigator, Route};
pub use services::DirectoryService;
pub use types::ViewLoad;
