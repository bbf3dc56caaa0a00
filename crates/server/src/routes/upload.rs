use std::path::Path;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize)]
pub struct UploadOutput {
    pub message: &'static str,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

/// `POST /api/upload-image`: multipart form with a binary `image` field
/// and an optional `productId` text field.
///
/// The file is stored under the public images directory using the bare
/// client-supplied file name; a repeat upload with the same name
/// overwrites. A `productId` that matches an existing product gets the
/// image path attached; an unknown or unparseable id leaves the stored
/// file unassociated.
pub async fn upload_image(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<Json<UploadOutput>, ApiError> {
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut product_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("image") => {
                let file_name = field.file_name().map(ToString::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?;
                if let Some(name) = file_name {
                    image = Some((name, data.to_vec()));
                }
            }
            Some("productId") => {
                product_id = field.text().await.ok();
            }
            _ => {}
        }
    }

    let (file_name, data) =
        image.ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "No image file uploaded"))?;

    // keep only the final path component of the client-supplied name
    let file_name = Path::new(&file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "No image file uploaded"))?
        .to_string();

    let dest = state.images_dir.join(&file_name);
    tokio::fs::write(&dest, &data).await.map_err(|e| {
        error!(error = %e, dest = %dest.display(), "failed to store uploaded image");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store image")
    })?;

    let image_path = format!("/images/{file_name}");

    if let Some(id) = product_id.as_deref().and_then(|s| s.trim().parse::<u64>().ok()) {
        state
            .catalog
            .attach_image(id, &image_path)
            .await
            .map_err(|e| ApiError::from_service(e, "Failed to update product data"))?;
    }

    Ok(Json(UploadOutput { message: "Image uploaded successfully", image_path }))
}
