//! Repository for the `assets` table.
//!
//! The serial-number existence checks are advisory: the
//! `uq_assets_serial_number` unique constraint is the final arbiter when
//! concurrent writers race on the same serial number.

use sqlx::PgPool;

use assetman_core::asset::AssetDraft;
use assetman_core::types::DbId;

use crate::models::asset::Asset;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, serial_number, acquisition_date, category, \
    status, description, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// List all assets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Find an asset by its ID. A miss is `Ok(None)`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any asset already uses the given serial number.
    pub async fn exists_by_serial_number(
        pool: &PgPool,
        serial_number: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM assets WHERE serial_number = $1)",
        )
        .bind(serial_number)
        .fetch_one(pool)
        .await
    }

    /// Whether any asset other than `id` uses the given serial number.
    ///
    /// Lets an update keep the target row's own serial number without
    /// reporting a self-collision.
    pub async fn exists_by_serial_number_excluding_id(
        pool: &PgPool,
        serial_number: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM assets WHERE serial_number = $1 AND id <> $2)",
        )
        .bind(serial_number)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new asset, returning the created row with its assigned ID.
    pub async fn create(pool: &PgPool, draft: &AssetDraft) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets
                (name, serial_number, acquisition_date, category, status, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&draft.name)
            .bind(&draft.serial_number)
            .bind(draft.acquisition_date)
            .bind(&draft.category)
            .bind(draft.status)
            .bind(&draft.description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all mutable fields of an existing asset.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &AssetDraft,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                name = $2,
                serial_number = $3,
                acquisition_date = $4,
                category = $5,
                status = $6,
                description = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.serial_number)
            .bind(draft.acquisition_date)
            .bind(&draft.category)
            .bind(draft.status)
            .bind(&draft.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
