use crate::errors::{client::ClientError, error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::BadGateway(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

impl From<ClientError> for HttpError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(_) | ClientError::Timeout => {
                HttpError::ServiceUnavailable(err.to_string())
            }
            ClientError::Http { status, message } => match status {
                400 | 422 => HttpError::BadRequest(message),
                404 => HttpError::NotFound(message),
                409 => HttpError::Conflict(message),
                _ => HttpError::BadGateway(message),
            },
            ClientError::Api(message) => HttpError::BadGateway(message),
            ClientError::Decode(_) => HttpError::BadGateway(err.to_string()),
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Client(client_err) => client_err.into(),
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }
            ServiceError::NotFound(what) => HttpError::NotFound(format!("{what} not found")),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::BadGateway(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_gateway_statuses() {
        let cases = [
            (ClientError::Timeout, StatusCode::SERVICE_UNAVAILABLE),
            (
                ClientError::Http { status: 404, message: "FAQ not found".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                ClientError::Http { status: 422, message: "bad".into() },
                StatusCode::BAD_REQUEST,
            ),
            (
                ClientError::Http { status: 500, message: "boom".into() },
                StatusCode::BAD_GATEWAY,
            ),
            (ClientError::Api("Duplicate title".into()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn api_message_is_passed_through() {
        let err = HttpError::from(ServiceError::Client(ClientError::Api(
            "Duplicate title".into(),
        )));
        assert_eq!(err.message(), "Duplicate title");
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = HttpError::from(ServiceError::NotFound("Tracking number TRK1".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Tracking number TRK1 not found");
    }
}
