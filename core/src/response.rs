//! The success-or-error envelope every operation returns.
//!
//! The server answers either with a success body or with its own error object.
//! `ApiResponse` keeps that exactly: it is untagged, so serializing it yields
//! the body the server sent, and callers discriminate on the `error` field the
//! same way the wire format does.

use serde::{Deserialize, Serialize};

use crate::types::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// The server's error object, unmodified.
    Error(ErrorResponse),
    Success(T),
}

impl<T> ApiResponse<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResponse> {
        match self {
            ApiResponse::Error(err) => Some(err),
            ApiResponse::Success(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorResponse> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Error(err) => Err(err),
        }
    }
}

impl<T> From<ErrorResponse> for ApiResponse<T> {
    fn from(err: ErrorResponse) -> Self {
        ApiResponse::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeleteMovieResponse, GetMovieResponse};

    #[test]
    fn error_body_deserializes_to_error_variant() {
        let resp: ApiResponse<GetMovieResponse> =
            serde_json::from_str(r#"{"error":"Movie with ID 999 not found"}"#).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error().unwrap().error, "Movie with ID 999 not found");
    }

    #[test]
    fn success_body_deserializes_to_success_variant() {
        let resp: ApiResponse<GetMovieResponse> = serde_json::from_str(
            r#"{"status":200,"data":{"id":1,"name":"My movie","year":1999,"rating":8.5}}"#,
        )
        .unwrap();
        let body = resp.success().unwrap();
        assert_eq!(body.data.name, "My movie");
        assert!(resp.error().is_none());
    }

    #[test]
    fn serializes_back_to_the_wire_shape() {
        let resp: ApiResponse<DeleteMovieResponse> = ApiResponse::Success(DeleteMovieResponse {
            status: 404,
            message: "Movie with ID 7 not found".to_string(),
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": 404, "message": "Movie with ID 7 not found"})
        );
        assert!(json.get("data").is_none());
    }

    #[test]
    fn into_result_splits_variants() {
        let err: ApiResponse<GetMovieResponse> = ErrorResponse::new("Not found").into();
        assert_eq!(err.into_result().unwrap_err().error, "Not found");
    }
}
