//! # Localization Provider
//!
//! Query/command layer between the HTTP services and the storage. Every read goes
//! through a [`Query`] and every write through a [`Command`], both executed
//! against a [`LocalizationProvider`] which owns the repository.
//!
//! Execution is synchronous; async callers wrap it in `spawn_blocking`.

pub mod commands;
pub mod language;
pub mod queries;

use crate::storage::{RepositoryError, RepositoryResult, ResourceRepository};

pub trait Query {
    type Output;

    fn execute(&self, repository: &ResourceRepository) -> RepositoryResult<Self::Output>;
}

pub trait Command {
    type Output;

    fn execute(&self, repository: &ResourceRepository) -> Result<Self::Output, CommandError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("`{0}` is not a valid language")]
    InvalidLanguage(String),
    #[error("invariant translation of code resource `{0}` cannot be deleted")]
    InvariantOfCodeResource(String),
    #[error("invalid import: {0}")]
    InvalidImport(String),
}

#[derive(Debug, Clone)]
pub struct LocalizationProvider {
    repository: ResourceRepository,
}

impl LocalizationProvider {
    pub fn new(repository: ResourceRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &ResourceRepository {
        &self.repository
    }

    pub fn query<Q: Query>(&self, query: &Q) -> RepositoryResult<Q::Output> {
        query.execute(&self.repository)
    }

    pub fn send<C: Command>(&self, command: &C) -> Result<C::Output, CommandError> {
        command.execute(&self.repository)
    }
}
