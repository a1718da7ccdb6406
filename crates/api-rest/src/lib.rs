//! # API REST
//!
//! REST API implementation for Marquee.
//!
//! Handles:
//! - HTTP endpoints with axum (`/data` CRUD plus `/health`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for the wire types and `marquee-core` for record
//! operations. Error taxonomy on the wire: missing required input is `400`,
//! an unknown identifier is `404`, and any storage failure is `500` with a
//! generic message; diagnostic detail goes to the operator log only.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use marquee_api_shared::{
    CreateMovieReq, DeleteMovieReq, HealthRes, HealthService, MessageRes, MovieRes, UpdateMovieReq,
};
use marquee_core::{Movie, MovieError, MovieService, NonEmptyText, RecordId};

/// Application state shared across REST API handlers
///
/// Holds the `MovieService` instance for record operations; the service
/// carries the process-wide configuration resolved at startup.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: MovieService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_movies, create_movie, update_movie, delete_movie),
    components(schemas(
        HealthRes,
        MovieRes,
        CreateMovieReq,
        UpdateMovieReq,
        DeleteMovieReq,
        MessageRes
    ))
)]
struct ApiDoc;

type ApiError = (StatusCode, Json<MessageRes>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(MessageRes {
            message: message.to_owned(),
        }),
    )
}

fn movie_res(movie: Movie) -> MovieRes {
    MovieRes {
        id: movie.id.to_string(),
        name: movie.name,
        image: movie.image,
        summary: movie.summary,
    }
}

/// Builds the REST router with CORS enabled for all origins and Swagger UI
/// mounted at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/data", get(list_movies))
        .route("/data", post(create_movie))
        .route("/data", put(update_movie))
        .route("/data", delete(delete_movie))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the router until the process is stopped.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails
/// while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "List of movie records", body = [MovieRes]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List all movie records
///
/// Returns every stored record, sorted by creation time then identifier so
/// the order is deterministic across calls.
///
/// # Errors
/// Returns `500 Internal Server Error` if the storage layer fails.
#[axum::debug_handler]
async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<MovieRes>>, ApiError> {
    match state.movie_service.list() {
        Ok(movies) => Ok(Json(movies.into_iter().map(movie_res).collect())),
        Err(e) => {
            tracing::error!("List movies error: {:?}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching data",
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/data",
    request_body = CreateMovieReq,
    responses(
        (status = 201, description = "Movie record created", body = MovieRes),
        (status = 400, description = "Missing or empty required field", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new movie record
///
/// All three fields must be present and non-empty; otherwise the request is
/// rejected before any write. On success the store assigns the identifier
/// and the full persisted record is returned.
///
/// # Errors
/// Returns `400 Bad Request` if any of `name`, `image`, `summary` is missing
/// or empty, and `500 Internal Server Error` if the storage layer fails.
#[axum::debug_handler]
async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<CreateMovieReq>,
) -> Result<(StatusCode, Json<MovieRes>), ApiError> {
    let name = req.name.and_then(|s| NonEmptyText::new(s).ok());
    let image = req.image.and_then(|s| NonEmptyText::new(s).ok());
    let summary = req.summary.and_then(|s| NonEmptyText::new(s).ok());

    let (Some(name), Some(image), Some(summary)) = (name, image, summary) else {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "All fields are required",
        ));
    };

    match state.movie_service.create(name, image, summary) {
        Ok(movie) => Ok((StatusCode::CREATED, Json(movie_res(movie)))),
        Err(e) => {
            tracing::error!("Create movie error: {:?}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving data",
            ))
        }
    }
}

#[utoipa::path(
    put,
    path = "/data",
    request_body = UpdateMovieReq,
    responses(
        (status = 200, description = "Movie record updated", body = MovieRes),
        (status = 400, description = "Missing identifier", body = MessageRes),
        (status = 404, description = "No record with the given identifier", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Update an existing movie record
///
/// Replaces the three mutable fields with the supplied values; a missing
/// field is stored as empty, so a caller may clear fields via update. The
/// identifier is immutable.
///
/// # Errors
/// Returns `400 Bad Request` if `_id` is missing, `404 Not Found` if no
/// record matches the identifier (a non-canonical identifier matches no
/// record), and `500 Internal Server Error` if the storage layer fails.
#[axum::debug_handler]
async fn update_movie(
    State(state): State<AppState>,
    Json(req): Json<UpdateMovieReq>,
) -> Result<Json<MovieRes>, ApiError> {
    let Some(id) = req.id else {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "ID is required for update",
        ));
    };
    let Ok(id) = RecordId::parse(&id) else {
        return Err(api_error(StatusCode::NOT_FOUND, "Data not found"));
    };

    match state.movie_service.update(
        &id,
        req.name.unwrap_or_default(),
        req.image.unwrap_or_default(),
        req.summary.unwrap_or_default(),
    ) {
        Ok(movie) => Ok(Json(movie_res(movie))),
        Err(MovieError::NotFound) => Err(api_error(StatusCode::NOT_FOUND, "Data not found")),
        Err(e) => {
            tracing::error!("Update movie error: {:?}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error updating data",
            ))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/data",
    request_body = DeleteMovieReq,
    responses(
        (status = 200, description = "Movie record deleted", body = MessageRes),
        (status = 400, description = "Missing identifier", body = MessageRes),
        (status = 404, description = "No record with the given identifier", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Delete a movie record
///
/// Hard delete with no confirmation step; a repeated delete of the same
/// identifier deterministically reports not-found.
///
/// # Errors
/// Returns `400 Bad Request` if `_id` is missing, `404 Not Found` if no
/// record matches the identifier, and `500 Internal Server Error` if the
/// storage layer fails.
#[axum::debug_handler]
async fn delete_movie(
    State(state): State<AppState>,
    Json(req): Json<DeleteMovieReq>,
) -> Result<Json<MessageRes>, ApiError> {
    let Some(id) = req.id else {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "ID is required for deletion",
        ));
    };
    let Ok(id) = RecordId::parse(&id) else {
        return Err(api_error(StatusCode::NOT_FOUND, "Data not found"));
    };

    match state.movie_service.delete(&id) {
        Ok(()) => Ok(Json(MessageRes {
            message: "Data deleted successfully".into(),
        })),
        Err(MovieError::NotFound) => Err(api_error(StatusCode::NOT_FOUND, "Data not found")),
        Err(e) => {
            tracing::error!("Delete movie error: {:?}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error deleting data",
            ))
        }
    }
}
