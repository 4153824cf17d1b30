//! City state reads against the single-row `city_state` table.

use sqlx::PgPool;
use transcity_types::CityState;

use crate::error::DbError;
use crate::legacy::decode_city_state;

/// Read-only operations on the `city_state` table.
pub struct CityStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CityStore<'a> {
    /// Create a new city store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch and decode the city state.
    ///
    /// A database with no city row yet yields [`CityState::default`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::Serialization`] if the blob is malformed.
    pub async fn get_city_state(&self) -> Result<CityState, DbError> {
        let row = sqlx::query_as::<_, CityStateRow>(
            r"SELECT data
              FROM city_state
              WHERE id = 1",
        )
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => decode_city_state(row.data),
            None => {
                tracing::debug!("No city_state row, using defaults");
                Ok(CityState::default())
            }
        }
    }
}

/// The row of the `city_state` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CityStateRow {
    /// City state blob.
    pub data: serde_json::Value,
}
