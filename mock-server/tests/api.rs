use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, DataBody, ErrorBody, MessageBody, Movie};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_movies_empty_returns_404() {
    let resp = app().oneshot(empty_request("GET", "/movies")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "No movies found");
}

#[tokio::test]
async fn get_movie_by_name_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/movies?name=My%20movie"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "Movie My movie not found");
}

// --- create ---

#[tokio::test]
async fn create_movie_assigns_an_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/movies",
            r#"{"name":"New movie","year":1999,"rating":8.5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: DataBody<Movie> = body_json(resp).await;
    assert_eq!(body.status, 200);
    assert_eq!(body.data.id, 1);
    assert_eq!(body.data.name, "New movie");
}

#[tokio::test]
async fn create_movie_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/movies", r#"{"name":"No year"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_movie_not_found() {
    let resp = app().oneshot(empty_request("GET", "/movies/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "Movie with ID 999 not found");
}

#[tokio::test]
async fn get_movie_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/movies/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_movie_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/movies/999", r#"{"name":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "Movie with ID 999 not found");
}

// --- delete ---

#[tokio::test]
async fn delete_movie_not_found_carries_a_message() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/movies/123456789"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: MessageBody = body_json(resp).await;
    assert_eq!(body.status, 404);
    assert_eq!(body.message, "Movie with ID 123456789 not found");
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/movies",
            r#"{"name":"My movie","year":1999,"rating":8.5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: DataBody<Movie> = body_json(resp).await;
    let id = created.data.id;

    // duplicate name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/movies",
            r#"{"name":"My movie","year":2001,"rating":5.0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let conflict: ErrorBody = body_json(resp).await;
    assert_eq!(conflict.error, "Movie My movie already exists");

    // list contains the one movie
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/movies"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: DataBody<Vec<Movie>> = body_json(resp).await;
    assert_eq!(listed.data, vec![created.data.clone()]);

    // by name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/movies?name=My%20movie"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let by_name: DataBody<Movie> = body_json(resp).await;
    assert_eq!(by_name.data.id, id);

    // update, partial: only year
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/movies/{id}"), r#"{"year":2000}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: DataBody<Movie> = body_json(resp).await;
    assert_eq!(updated.data.year, 2000);
    assert_eq!(updated.data.name, "My movie"); // unchanged

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/movies/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: MessageBody = body_json(resp).await;
    assert_eq!(deleted.message, format!("Movie {id} has been deleted"));

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/movies/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ids are not reused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/movies",
            r#"{"name":"Second movie","year":2010,"rating":7.0}"#,
        ))
        .await
        .unwrap();
    let second: DataBody<Movie> = body_json(resp).await;
    assert_eq!(second.data.id, id + 1);
}
