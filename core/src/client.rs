//! Stateless HTTP request builder and response parser for the movie API.
//!
//! # Design
//! `MovieClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O.
//!
//! Any 2xx is a success. A non-2xx reply is handed back as the server's own
//! error object inside `ApiResponse::Error`; only bodies that fit neither shape
//! become an `ApiError`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::response::ApiResponse;
use crate::types::{
    DeleteMovieResponse, ErrorResponse, GetMovieResponse, ListMoviesResponse, MovieUpdate,
    NewMovie,
};

/// Characters left alone by `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Synchronous, stateless client for the movie API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct MovieClient {
    base_url: String,
}

impl MovieClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_movies(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/movies".to_string())
    }

    pub fn build_get_movie_by_name(&self, name: &str) -> HttpRequest {
        let name = utf8_percent_encode(name, QUERY_COMPONENT);
        self.request(HttpMethod::Get, format!("/movies?name={name}"))
    }

    pub fn build_get_movie_by_id(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/movies/{id}"))
    }

    pub fn build_add_movie(&self, movie: &NewMovie) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(movie).map_err(ApiError::Serialization)?;
        Ok(self.json_request(HttpMethod::Post, "/movies".to_string(), body))
    }

    pub fn build_update_movie(
        &self,
        id: i64,
        update: &MovieUpdate,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(update).map_err(ApiError::Serialization)?;
        Ok(self.json_request(HttpMethod::Put, format!("/movies/{id}"), body))
    }

    pub fn build_delete_movie_by_id(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/movies/{id}"))
    }

    pub fn parse_get_movies(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<ListMoviesResponse>, ApiError> {
        parse_data(response)
    }

    pub fn parse_get_movie_by_name(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
        parse_data(response)
    }

    pub fn parse_get_movie_by_id(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
        parse_data(response)
    }

    pub fn parse_add_movie(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
        parse_data(response)
    }

    pub fn parse_update_movie(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
        parse_data(response)
    }

    /// Delete replies use `{status, message}` for both outcomes, including the
    /// 404 case, so a non-2xx body is tried against that shape first.
    pub fn parse_delete_movie_by_id(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<DeleteMovieResponse>, ApiError> {
        if response.is_success() {
            return parse_data(response);
        }
        match serde_json::from_str::<DeleteMovieResponse>(&response.body) {
            Ok(body) => Ok(ApiResponse::Success(body)),
            Err(_) => parse_error(response).map(ApiResponse::Error),
        }
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(&self, method: HttpMethod, path: String, body: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// Decode a 2xx body by the presence of `error`, or hand back the server's
/// error object for anything else.
fn parse_data<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>, ApiError> {
    if !response.is_success() {
        return parse_error(response).map(ApiResponse::Error);
    }
    serde_json::from_str(&response.body).map_err(|source| ApiError::Deserialization {
        status: response.status,
        source,
    })
}

/// A non-2xx body without an `error` field is not an error object; it is kept
/// raw in `ApiError::UnexpectedResponse`.
fn parse_error(response: HttpResponse) -> Result<ErrorResponse, ApiError> {
    debug!(status = response.status, "server returned an error response");
    serde_json::from_str(&response.body).map_err(|_| ApiError::UnexpectedResponse {
        status: response.status,
        body: response.body,
    })
}
