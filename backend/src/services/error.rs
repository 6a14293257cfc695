use crate::provider::CommandError;
use crate::storage::RepositoryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use localization_common::model::api::ServiceOperationResult;
use log::error;

/// Body message for 5xx responses; the cause is only written to the log.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("authentication required")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("invalid upload: {0}")]
    Upload(String),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
            ServiceError::Command(CommandError::Repository(e)) => repository_status(e),
            ServiceError::Command(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(e) => repository_status(e),
            ServiceError::Upload(_) => StatusCode::BAD_REQUEST,
            ServiceError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(ServiceOperationResult { message })
    }
}
