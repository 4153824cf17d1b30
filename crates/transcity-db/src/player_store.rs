//! Player reads against the `players` table.

use rust_decimal::Decimal;
use sqlx::PgPool;
use transcity_types::{Player, PlayerId};

use crate::error::DbError;
use crate::legacy::{decode_businesses, decode_estates};

/// Read-only operations on the `players` table.
pub struct PlayerStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerStore<'a> {
    /// Create a new player store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the raw row for a player.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get_row(&self, id: PlayerId) -> Result<Option<PlayerRow>, DbError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r"SELECT user_id, username, job, level, money, bank_balance, debt,
                     tax_accrued, tax_paid, businesses, estates
              FROM players
              WHERE user_id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Fetch and decode a player.
    ///
    /// Returns `Ok(None)` when no row exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::Serialization`] if a holdings blob is malformed.
    pub async fn get_player(&self, id: PlayerId) -> Result<Option<Player>, DbError> {
        let Some(row) = self.get_row(id).await? else {
            tracing::debug!(player_id = %id, "No player row");
            return Ok(None);
        };
        row.into_player().map(Some)
    }
}

/// A row from the `players` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    /// Messenger user id.
    pub user_id: i64,
    /// Display name.
    pub username: Option<String>,
    /// Job title.
    pub job: Option<String>,
    /// Player level.
    pub level: i32,
    /// Wallet balance.
    pub money: i64,
    /// Bank deposit.
    pub bank_balance: i64,
    /// Outstanding debt.
    pub debt: i64,
    /// Total tax charged.
    pub tax_accrued: Decimal,
    /// Total tax paid.
    pub tax_paid: Decimal,
    /// Businesses blob keyed by business id.
    pub businesses: serde_json::Value,
    /// Estates blob keyed by estate id.
    pub estates: serde_json::Value,
}

impl PlayerRow {
    /// Decode the row into a typed [`Player`].
    ///
    /// Negative levels clamp to 0. Blank job titles become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if a holdings blob is malformed.
    pub fn into_player(self) -> Result<Player, DbError> {
        Ok(Player {
            id: PlayerId(self.user_id),
            username: self.username,
            job: self.job.filter(|j| !j.trim().is_empty()),
            level: u32::try_from(self.level).unwrap_or(0),
            wallet: self.money,
            bank: self.bank_balance,
            debt: self.debt,
            tax_accrued: self.tax_accrued,
            tax_paid: self.tax_paid,
            businesses: decode_businesses(self.businesses)?,
            estates: decode_estates(self.estates)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use transcity_types::EstateId;

    use super::*;

    fn row() -> PlayerRow {
        PlayerRow {
            user_id: 7,
            username: Some(String::from("Mira")),
            job: Some(String::new()),
            level: -1,
            money: 100,
            bank_balance: 50,
            debt: 150,
            tax_accrued: Decimal::new(120, 0),
            tax_paid: Decimal::new(20, 0),
            businesses: json!({}),
            estates: json!({"cabin": {"last_rent": 0}}),
        }
    }

    #[test]
    fn row_decodes_into_player() {
        let player = row().into_player().unwrap();
        assert_eq!(player.id, PlayerId(7));
        assert_eq!(player.level, 0);
        assert!(player.job.is_none());
        assert_eq!(player.wallet, 100);
        assert_eq!(player.bank, 50);
        assert_eq!(player.debt, 150);
        let cabin = player.estates.get(&EstateId::from("cabin")).unwrap();
        assert!(cabin.last_rent.is_none());
    }

    #[test]
    fn malformed_holdings_fail_decoding() {
        let mut bad = row();
        bad.businesses = json!("oops");
        assert!(bad.into_player().is_err());
    }
}
