use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

/// Every failure of the account endpoints is reported to the client the
/// same way: `400 Bad Request` with this fixed message.
#[derive(Error, Debug, PartialEq)]
pub enum RestApiError {
    #[error("Ca va pas la tête ?")]
    ResourceOperationFailed,
}

impl actix_web::error::ResponseError for RestApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::ResourceOperationFailed => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(self.to_string())
    }
}
