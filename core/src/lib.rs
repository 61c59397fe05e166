//! Client core for the movie catalog API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `transport::UreqTransport`
//! executes requests, and the functions in `api` chain all three steps for
//! callers that just want `get_movies(base_url)`.
//!
//! # Design
//! - `MovieClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Server-reported failures are values (`ApiResponse::Error`), not errors;
//!   `ApiError` is reserved for transport and decoding failures.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;
pub mod types;

pub use api::{
    add_movie, delete_movie_by_id, get_movie_by_id, get_movie_by_name, get_movies, update_movie,
};
pub use client::MovieClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::ApiResponse;
pub use transport::UreqTransport;
pub use types::{
    DataResponse, DeleteMovieResponse, ErrorResponse, GetMovieResponse, ListMoviesResponse, Movie,
    MovieUpdate, NewMovie,
};
