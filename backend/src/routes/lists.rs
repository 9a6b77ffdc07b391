//! Cart and favourites routes
//!
//! Four thin wrappers over the one membership-list service; the response
//! messages live here, next to the endpoints that publish them.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ListService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use bookstore_shared::models::ListKind;
use bookstore_shared::types::{CartResponse, FavouritesResponse};
use uuid::Uuid;

/// Create cart and favourites routes
pub fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/addtocart/:bookId", put(add_to_cart))
        .route("/removefromcart/:bookId", put(remove_from_cart))
        .route("/addtofavourites/:bookId", put(add_to_favourites))
        .route("/removefromfavourites/:bookId", put(remove_from_favourites))
}

/// PUT /api/v1/addtocart/:bookId (requires authentication)
async fn add_to_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> ApiResult<Json<CartResponse>> {
    let cart = ListService::add(state.db(), auth.account_id, book_id, ListKind::Cart).await?;
    Ok(Json(CartResponse {
        message: "Book added to cart".to_string(),
        cart,
    }))
}

/// PUT /api/v1/removefromcart/:bookId (requires authentication)
async fn remove_from_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> ApiResult<Json<CartResponse>> {
    let cart = ListService::remove(state.db(), auth.account_id, book_id, ListKind::Cart).await?;
    Ok(Json(CartResponse {
        message: "Book removed from cart".to_string(),
        cart,
    }))
}

/// PUT /api/v1/addtofavourites/:bookId (requires authentication)
async fn add_to_favourites(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> ApiResult<Json<FavouritesResponse>> {
    let favourites =
        ListService::add(state.db(), auth.account_id, book_id, ListKind::Favourites).await?;
    Ok(Json(FavouritesResponse {
        message: "Book added to favourites".to_string(),
        favourites,
    }))
}

/// PUT /api/v1/removefromfavourites/:bookId (requires authentication)
async fn remove_from_favourites(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> ApiResult<Json<FavouritesResponse>> {
    let favourites =
        ListService::remove(state.db(), auth.account_id, book_id, ListKind::Favourites).await?;
    Ok(Json(FavouritesResponse {
        message: "Book removed from favourites".to_string(),
        favourites,
    }))
}
