use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use models::product::{NewProduct, Product};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize)]
pub struct CreateProductOutput {
    pub message: &'static str,
    pub product: Product,
}

/// `GET /api/products`: the full catalog; an absent or unreadable record
/// file reads as an empty catalog.
pub async fn list_products(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.list().await)
}

/// `POST /api/products`: 201 with the created record; 400 on missing
/// name/price or a non-numeric price, 500 on storage failure.
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<CreateProductOutput>), ApiError> {
    let product = state
        .catalog
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to add product"))?;
    Ok((StatusCode::CREATED, Json(CreateProductOutput { message: "Product added successfully", product })))
}
