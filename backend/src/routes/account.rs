//! Account routes: signup, signin, profile, address

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bookstore_shared::types::{
    AccountResponse, AccountView, AuthResponse, SigninRequest, SignupRequest,
    UpdateAddressRequest,
};

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/userInfo", get(user_info))
        .route("/update_address", put(update_address))
}

/// POST /api/v1/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let resp = AccountService::signup(state.db(), state.jwt(), &req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// POST /api/v1/signin
async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let resp = AccountService::signin(state.db(), state.jwt(), &req.email, &req.password).await?;
    Ok(Json(resp))
}

/// GET /api/v1/userInfo (requires authentication)
async fn user_info(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AccountView>> {
    let view = AccountService::get_profile(state.db(), auth.account_id).await?;
    Ok(Json(view))
}

/// PUT /api/v1/update_address (requires authentication)
async fn update_address(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateAddressRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let resp = AccountService::update_address(state.db(), auth.account_id, &req.address).await?;
    Ok(Json(resp))
}
