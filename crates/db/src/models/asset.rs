//! Row type for the `assets` table.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use assetman_core::asset::AssetStatus;
use assetman_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
///
/// Serialized with camelCase field names to match the wire format
/// (`serialNumber`, `acquisitionDate`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    pub category: String,
    pub status: AssetStatus,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
