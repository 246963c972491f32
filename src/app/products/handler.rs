//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{Product, ProductInput};
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    extract::{parse_id, Payload},
    response::ApiResponse,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, CoreError> {
    let products = state.product_service.list_products()?;
    Ok(Json(ApiResponse::success(products)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.product_service.get_product(parse_id(&id))?;
    Ok(Json(ApiResponse::success(product)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Payload(input): Payload<ProductInput>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let product = state.product_service.create_product(input)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Product created", product)),
    ))
}
