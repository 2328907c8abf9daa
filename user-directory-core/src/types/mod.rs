//! Type definitions module

mod load;

pub use load::ViewLoad;

// Re-export the record types of the data source
pub use user_directory_provider::{Address, Company, Geo, UserRecord};
