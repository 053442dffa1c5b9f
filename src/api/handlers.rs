use crate::application::checkout::{ServiceDependencies, checkout_book};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{CheckoutRequest, LoanResponse},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// POST /checkouts - 書籍を貸し出す
///
/// 強制されるビジネスルール:
/// - 未返却の貸出が上限（10冊）未満であること
/// - 返却期限を過ぎた貸出がないこと
/// - 確保できる蔵書があること
pub async fn create_checkout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;

    let loan = checkout_book(&state.service_deps, req.to_command()).await?;

    Ok((StatusCode::CREATED, Json(LoanResponse::from(loan))))
}
