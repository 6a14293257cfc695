//! # Storage
//!
//! SQLite persistence for localization resources and their translations.
//!
//! Two tables back the store:
//! - `LocalizationResources(Id, ResourceKey, Author, FromCode, IsHidden, IsModified, ModificationDate, Notes)`
//! - `LocalizationResourceTranslations(Id, ResourceId, Language, Value)`
//!
//! Every repository call opens its own connection and runs synchronously, so callers
//! on the async side are expected to go through `tokio::task::spawn_blocking`.

mod error;
mod repository;
mod schema;

pub use error::{RepositoryError, RepositoryResult};
pub use repository::ResourceRepository;

#[cfg(test)]
pub(crate) use repository::tests as repository_tests;
