//! Movie routes.
//!
//! ## Routes
//!
//! - `GET /movies` — every movie, or only those from `?year=N`.
//! - `POST /movies` — create a movie from a JSON body; the id is assigned here.
//! - `GET /movies/{id}` — one movie.
//! - `DELETE /movies/{id}` — remove one movie.
//!
//! Everything after `/movies/` is taken as the id, so `/movies/` and
//! `/movies/1/2` are invalid ids rather than unknown routes. Any other
//! method on these paths, `HEAD` included, gets an empty 405.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::ALLOW;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tracing::info;

use super::codec::{decode_movie, is_json_request, json_response};
use super::error::ApiError;
use super::guard::panic_guard;
use crate::store::MoviesStore;
use crate::validation::validate;

const ITEM_PREFIX: &str = "/movies/";

/// Build the movie `Router` backed by `store`.
pub fn router(store: Arc<MoviesStore>) -> Router {
    Router::new()
        .route(
            "/movies",
            get(list_movies)
                .post(create_movie)
                .head(|| async { method_not_allowed("GET, POST") }),
        )
        .route("/movies/", item_routes())
        .route("/movies/*id", item_routes())
        .layer(from_fn(panic_guard))
        .with_state(store)
}

fn item_routes() -> MethodRouter<Arc<MoviesStore>> {
    get(get_movie)
        .delete(delete_movie)
        .head(|| async { method_not_allowed("GET, DELETE") })
}

fn method_not_allowed(allow: &'static str) -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, allow)]).into_response()
}

/// `GET /movies[?year=N]`
async fn list_movies(
    State(store): State<Arc<MoviesStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let movies = match params.get("year") {
        Some(raw) => {
            let year: i32 = raw.parse().map_err(|_| ApiError::InvalidQuery("year"))?;
            store.filter_by_year(year)?
        }
        None => store.list()?,
    };
    Ok(json_response(StatusCode::OK, &movies))
}

/// `POST /movies`
async fn create_movie(
    State(store): State<Arc<MoviesStore>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !is_json_request(&headers) {
        return Err(ApiError::UnsupportedMediaType);
    }

    let candidate = decode_movie(&body)?;
    let violations = validate(&candidate);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let movie = store.add(candidate)?;
    info!(id = movie.id, "movie created");
    Ok(json_response(StatusCode::CREATED, &movie))
}

/// `GET /movies/{id}`
async fn get_movie(
    State(store): State<Arc<MoviesStore>>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let movie = match parse_id(&uri)? {
        Some(id) => store.get(id)?,
        None => None,
    };
    let movie = movie.ok_or(ApiError::NotFound)?;
    Ok(json_response(StatusCode::OK, &movie))
}

/// `DELETE /movies/{id}`
async fn delete_movie(
    State(store): State<Arc<MoviesStore>>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let id = parse_id(&uri)?.ok_or(ApiError::NotFound)?;
    if !store.delete(id)? {
        return Err(ApiError::NotFound);
    }
    info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Parse the raw path suffix after `/movies/` as a signed 64-bit integer.
///
/// A negative id is well-formed but can never be stored, so it comes back
/// as `None` and the caller answers 404.
fn parse_id(uri: &Uri) -> Result<Option<u64>, ApiError> {
    let raw = uri.path().strip_prefix(ITEM_PREFIX).unwrap_or_default();
    let id: i64 = raw.parse().map_err(|_| ApiError::InvalidId)?;
    Ok(u64::try_from(id).ok())
}
