use rocket::http::Status;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn log_and_record(&self, ctx: &str) {
        match self {
            AppError::Database(err) => {
                error!(context = %ctx, db_error = %err, "Database error");
            }
            AppError::InvalidArgument(msg) => {
                warn!(message = %msg, context = %ctx, "Invalid argument");
            }
            AppError::Validation(errors) => {
                warn!(errors = %errors, context = %ctx, "Validation error");
            }
            AppError::NotFound(msg) => {
                // Absent rows are an expected outcome, not a fault
                info!(message = %msg, context = %ctx, "Not found");
            }
        }
    }

    pub fn status_code(&self) -> Status {
        match self {
            AppError::Database(_) => Status::InternalServerError,
            AppError::InvalidArgument(_) => Status::BadRequest,
            AppError::Validation(_) => Status::BadRequest,
            AppError::NotFound(_) => Status::NotFound,
        }
    }

    pub fn to_status_with_log(&self, context: &str) -> Status {
        self.log_and_record(context);
        self.status_code()
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        self.to_status_with_log(&format!("Request to {} {}", req.method(), req.uri()))
            .respond_to(req)
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        err.to_status_with_log("Error conversion into Status")
    }
}
