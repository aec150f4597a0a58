use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::StatusCode};
use serde_json::json;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

// Implement conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// Implement conversion from sqlx::Error
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(DatabaseError::from(err))
    }
}

// Add conversion from std::io::Error
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

// Implement actix_web::ResponseError for AppError
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::DatabaseError(DatabaseError::NotFound) => {
                HttpResponse::build(status).json(json!({
                    "error": "Record not found"
                }))
            }
            // Database failures keep the upstream wire shape: a plain-text
            // body of "Database error: " followed by the driver message. The
            // native error code is logged, never returned to the client.
            AppError::DatabaseError(e) => {
                match e {
                    DatabaseError::QueryError { code: Some(code), message } => {
                        error!("Database error (code {}): {}", code, message);
                    }
                    _ => {
                        error!("Database error: {}", e);
                    }
                }
                HttpResponse::build(status)
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            _ => {
                let message = self.to_string();
                let response = json!({
                    "error": {
                        "status": status.as_u16(),
                        "message": message
                    }
                });
                HttpResponse::build(status).json(response)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(DatabaseError::NotFound) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("{message}")]
    QueryError {
        message: String,
        code: Option<String>,
    },

    #[error("Record not found")]
    NotFound,

    #[error("missing column `{0}` in result row")]
    MissingColumn(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound,
            // A result row without an expected column is a schema-contract
            // violation, not a recoverable per-row condition.
            sqlx::Error::ColumnNotFound(name) => DatabaseError::MissingColumn(name),
            sqlx::Error::Database(e) => DatabaseError::QueryError {
                message: e.message().to_string(),
                code: e.code().map(|c| c.into_owned()),
            },
            sqlx::Error::Io(e) => DatabaseError::ConnectionError(e.to_string()),
            other => DatabaseError::QueryError {
                message: other.to_string(),
                code: None,
            },
        }
    }
}
