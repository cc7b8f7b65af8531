use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Field required: {0}")]
    MissingField(&'static str),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Multipart(err) => err.status(),
            Error::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            log::error!("Request failed: {detail}");
        } else {
            log::warn!("Rejected request: {detail}");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
