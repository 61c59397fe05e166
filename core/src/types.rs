//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Success bodies are wrapped in an envelope that repeats the HTTP status
//! (`{"status":200,"data":...}`); error bodies carry only an `error` string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single movie record. `id` is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub rating: f64,
}

/// Request payload for adding a movie: a `Movie` without its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovie {
    pub name: String,
    pub year: i32,
    pub rating: f64,
}

/// Request payload for updating an existing movie. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl From<NewMovie> for MovieUpdate {
    fn from(movie: NewMovie) -> Self {
        Self {
            name: Some(movie.name),
            year: Some(movie.year),
            rating: Some(movie.rating),
        }
    }
}

/// Failure payload returned by the server on non-2xx responses.
///
/// Any fields besides `error` are kept in `extra` and written back on
/// serialization, so the object round-trips as the server sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            extra: Map::new(),
        }
    }
}

/// Success envelope: the HTTP status echoed in the body plus the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    pub status: u16,
    pub data: T,
}

pub type GetMovieResponse = DataResponse<Movie>;
pub type ListMoviesResponse = DataResponse<Vec<Movie>>;

/// Body of a delete reply. The server uses the same shape for "deleted" and
/// "not found"; only `status` tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteMovieResponse {
    pub status: u16,
    pub message: String,
}

impl DeleteMovieResponse {
    pub fn is_deleted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
