//! Catalog routes: admin-gated book mutation plus the public listing

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use bookstore_shared::types::{
    AddBookRequest, BookCreatedResponse, BookListResponse, BookResponse, MessageResponse,
    UpdateBookRequest,
};
use uuid::Uuid;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/addbook", post(add_book))
        .route("/updatebook/:bookId", put(update_book))
        .route("/deletebook/:bookId", delete(delete_book))
        .route("/allbooks", get(all_books))
}

/// POST /api/v1/addbook (requires admin)
async fn add_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddBookRequest>,
) -> ApiResult<(StatusCode, Json<BookCreatedResponse>)> {
    let resp = CatalogService::add_book(state.db(), auth.account_id, &req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// PUT /api/v1/updatebook/:bookId (requires admin)
async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
    Json(req): Json<UpdateBookRequest>,
) -> ApiResult<Json<BookResponse>> {
    let resp = CatalogService::update_book(state.db(), auth.account_id, book_id, &req).await?;
    Ok(Json(resp))
}

/// DELETE /api/v1/deletebook/:bookId (requires admin)
async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let resp = CatalogService::delete_book(state.db(), auth.account_id, book_id).await?;
    Ok(Json(resp))
}

/// GET /api/v1/allbooks — public, no authentication
async fn all_books(State(state): State<AppState>) -> ApiResult<Json<BookListResponse>> {
    let resp = CatalogService::list_books(state.db()).await?;
    Ok(Json(resp))
}
