//! Handlers for the `/assets` resource.
//!
//! Every mutation validates its payload and runs the serial-number
//! uniqueness check before touching the database, so a rejected request
//! leaves the stored record unchanged.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use assetman_core::asset::AssetInput;
use assetman_core::error::CoreError;
use assetman_core::types::DbId;
use assetman_db::models::asset::Asset;
use assetman_db::repositories::AssetRepo;

use crate::error::AppResult;
use crate::state::AppState;

const DUPLICATE_SERIAL: &str = "an asset with this serial number already exists";

/// GET /assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRepo::list(&state.pool).await?;
    Ok(Json(assets))
}

/// POST /assets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AssetInput>,
) -> AppResult<Json<Asset>> {
    let draft = input.validate().map_err(CoreError::from)?;

    // Advisory check; the unique constraint closes the race.
    if AssetRepo::exists_by_serial_number(&state.pool, &draft.serial_number).await? {
        return Err(CoreError::Conflict(DUPLICATE_SERIAL.to_string()).into());
    }

    let asset = AssetRepo::create(&state.pool, &draft).await?;
    tracing::info!(id = asset.id, serial_number = %asset.serial_number, "Asset created");
    Ok(Json(asset))
}

/// PUT /assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssetInput>,
) -> AppResult<Json<Asset>> {
    let draft = input.validate().map_err(CoreError::from)?;

    if AssetRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::NotFound { entity: "asset", id }.into());
    }

    // Keeping the row's own serial number is not a conflict.
    if AssetRepo::exists_by_serial_number_excluding_id(&state.pool, &draft.serial_number, id)
        .await?
    {
        return Err(CoreError::Conflict(DUPLICATE_SERIAL.to_string()).into());
    }

    let asset = AssetRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(CoreError::NotFound { entity: "asset", id })?;
    tracing::info!(id = asset.id, "Asset updated");
    Ok(Json(asset))
}

/// DELETE /assets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound { entity: "asset", id }.into());
    }
    tracing::info!(id, "Asset deleted");
    Ok(StatusCode::OK)
}
