use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub rating: f64,
}

#[derive(Deserialize)]
pub struct CreateMovie {
    pub name: String,
    pub year: i32,
    pub rating: f64,
}

#[derive(Deserialize)]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataBody<T> {
    pub status: u16,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A non-2xx reply carrying `{"error": ...}`.
pub struct Failure {
    status: StatusCode,
    error: String,
}

impl Failure {
    fn not_found(error: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error,
        }
    }

    fn movie_not_found(id: i64) -> Self {
        Self::not_found(format!("Movie with ID {id} not found"))
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

#[derive(Debug, Default)]
pub struct Store {
    movies: BTreeMap<i64, Movie>,
    last_id: i64,
}

impl Store {
    fn by_name(&self, name: &str) -> Option<&Movie> {
        self.movies.values().find(|movie| movie.name == name)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn ok<T: Serialize>(data: T) -> Json<DataBody<T>> {
    Json(DataBody {
        status: StatusCode::OK.as_u16(),
        data,
    })
}

async fn list_movies(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Result<Response, Failure> {
    let store = db.read().await;
    if let Some(name) = query.name {
        let movie = store
            .by_name(&name)
            .cloned()
            .ok_or_else(|| Failure::not_found(format!("Movie {name} not found")))?;
        return Ok(ok(movie).into_response());
    }
    if store.movies.is_empty() {
        return Err(Failure::not_found("No movies found".to_string()));
    }
    Ok(ok(store.movies.values().cloned().collect::<Vec<_>>()).into_response())
}

async fn create_movie(
    State(db): State<Db>,
    Json(input): Json<CreateMovie>,
) -> Result<Json<DataBody<Movie>>, Failure> {
    let mut store = db.write().await;
    if store.by_name(&input.name).is_some() {
        warn!(name = %input.name, "rejecting duplicate movie");
        return Err(Failure {
            status: StatusCode::CONFLICT,
            error: format!("Movie {} already exists", input.name),
        });
    }
    store.last_id += 1;
    let movie = Movie {
        id: store.last_id,
        name: input.name,
        year: input.year,
        rating: input.rating,
    };
    store.movies.insert(movie.id, movie.clone());
    info!(id = movie.id, name = %movie.name, "movie created");
    Ok(ok(movie))
}

async fn get_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<DataBody<Movie>>, Failure> {
    let store = db.read().await;
    store
        .movies
        .get(&id)
        .cloned()
        .map(ok)
        .ok_or_else(|| Failure::movie_not_found(id))
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMovie>,
) -> Result<Json<DataBody<Movie>>, Failure> {
    let mut store = db.write().await;
    let movie = store
        .movies
        .get_mut(&id)
        .ok_or_else(|| Failure::movie_not_found(id))?;
    if let Some(name) = input.name {
        movie.name = name;
    }
    if let Some(year) = input.year {
        movie.year = year;
    }
    if let Some(rating) = input.rating {
        movie.rating = rating;
    }
    info!(id, "movie updated");
    Ok(ok(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<MessageBody>) {
    let mut store = db.write().await;
    let (status, message) = match store.movies.remove(&id) {
        Some(_) => {
            info!(id, "movie deleted");
            (StatusCode::OK, format!("Movie {id} has been deleted"))
        }
        None => (StatusCode::NOT_FOUND, format!("Movie with ID {id} not found")),
    };
    (
        status,
        Json(MessageBody {
            status: status.as_u16(),
            message,
        }),
    )
}
