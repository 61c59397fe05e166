//! One-call operations: build, execute over ureq, parse.
//!
//! Each function takes the base URL per call and holds nothing between calls.

use crate::client::MovieClient;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::transport::UreqTransport;
use crate::types::{
    DeleteMovieResponse, GetMovieResponse, ListMoviesResponse, MovieUpdate, NewMovie,
};

/// GET `/movies`.
pub fn get_movies(base_url: &str) -> Result<ApiResponse<ListMoviesResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_get_movies())?;
    client.parse_get_movies(response)
}

/// GET `/movies?name=<name>`.
pub fn get_movie_by_name(
    base_url: &str,
    name: &str,
) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_get_movie_by_name(name))?;
    client.parse_get_movie_by_name(response)
}

/// GET `/movies/<id>`.
pub fn get_movie_by_id(
    base_url: &str,
    id: i64,
) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_get_movie_by_id(id))?;
    client.parse_get_movie_by_id(response)
}

/// POST `/movies`. A duplicate name comes back as a 409 error object.
pub fn add_movie(
    base_url: &str,
    movie: &NewMovie,
) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_add_movie(movie)?)?;
    client.parse_add_movie(response)
}

/// PUT `/movies/<id>`.
pub fn update_movie(
    base_url: &str,
    id: i64,
    update: &MovieUpdate,
) -> Result<ApiResponse<GetMovieResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_update_movie(id, update)?)?;
    client.parse_update_movie(response)
}

/// DELETE `/movies/<id>`. Both outcomes are `Success`; check `status`.
pub fn delete_movie_by_id(
    base_url: &str,
    id: i64,
) -> Result<ApiResponse<DeleteMovieResponse>, ApiError> {
    let client = MovieClient::new(base_url);
    let response = UreqTransport::new().execute(&client.build_delete_movie_by_id(id))?;
    client.parse_delete_movie_by_id(response)
}
