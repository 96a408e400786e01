//! Bus group repository for database operations.
//!
//! This is the group-consistency manager: it keeps the group field on signup
//! rows consistent with the membership list on the bus_groups row. Each
//! operation runs both sides inside a single transaction, so a failure on
//! either side leaves neither applied. Within a transaction the signup-side
//! updates execute before the group-side write, matching the operation order
//! of the data model.
//!
//! No cross-request coordination exists: two grouping requests touching
//! overlapping signup ids race, and the last-committed transaction wins per
//! row without a conflict error.

use chrono::NaiveDate;
use domain::models::signup::GROUP_NONE;
use sqlx::PgPool;
use thiserror::Error;

use crate::entities::BusGroupEntity;
use crate::metrics::QueryTimer;

/// Errors from group consistency operations.
#[derive(Debug, Error)]
pub enum GroupOpError {
    #[error("Group not found")]
    NotFound,

    #[error("No document IDs found in group")]
    EmptyMembers,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository for bus group operations.
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Creates a new GroupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by bus id.
    pub async fn find_by_id(&self, bus_id: &str) -> Result<Option<BusGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_group_by_id");
        let result = sqlx::query_as::<_, BusGroupEntity>(
            r#"
            SELECT bus_id, document_ids, location, pickup_time, created_at, updated_at
            FROM bus_groups
            WHERE bus_id = $1
            "#,
        )
        .bind(bus_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Assign signups to a bus, creating the group if needed.
    ///
    /// Sets `group_id = bus_id` on every listed signup in the given day's
    /// table, then upserts the group row with the new membership list.
    /// Member ids are not checked against existing signups; an id with no
    /// matching row is a no-op on the signup side. Idempotent: re-running
    /// with the same inputs reproduces the same end state.
    pub async fn assign_group(
        &self,
        day: NaiveDate,
        bus_id: &str,
        document_ids: &[String],
        location: &str,
        time: &str,
    ) -> Result<(), GroupOpError> {
        let timer = QueryTimer::new("assign_group");
        let mut tx = self.pool.begin().await?;

        for doc_id in document_ids {
            sqlx::query(
                r#"
                UPDATE signups
                SET group_id = $3, updated_at = NOW()
                WHERE day = $1 AND doc_id = $2
                "#,
            )
            .bind(day)
            .bind(doc_id)
            .bind(bus_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO bus_groups (bus_id, document_ids, location, pickup_time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (bus_id) DO UPDATE
            SET document_ids = EXCLUDED.document_ids,
                location = EXCLUDED.location,
                pickup_time = EXCLUDED.pickup_time,
                updated_at = NOW()
            "#,
        )
        .bind(bus_id)
        .bind(document_ids)
        .bind(location)
        .bind(time)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Replace an existing group's membership wholesale.
    ///
    /// Fails with [`GroupOpError::NotFound`] if the group row does not exist.
    /// Ids present in the old list but absent from the new one keep whatever
    /// group value they had; only delete resets members.
    pub async fn reassign_group(
        &self,
        day: NaiveDate,
        bus_id: &str,
        document_ids: &[String],
        location: &str,
        time: &str,
    ) -> Result<(), GroupOpError> {
        let timer = QueryTimer::new("reassign_group");
        let mut tx = self.pool.begin().await?;

        for doc_id in document_ids {
            sqlx::query(
                r#"
                UPDATE signups
                SET group_id = $3, updated_at = NOW()
                WHERE day = $1 AND doc_id = $2
                "#,
            )
            .bind(day)
            .bind(doc_id)
            .bind(bus_id)
            .execute(&mut *tx)
            .await?;
        }

        let updated = sqlx::query(
            r#"
            UPDATE bus_groups
            SET document_ids = $2, location = $3, pickup_time = $4, updated_at = NOW()
            WHERE bus_id = $1
            "#,
        )
        .bind(bus_id)
        .bind(document_ids)
        .bind(location)
        .bind(time)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(GroupOpError::NotFound);
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Delete a group and reset every member signup to the ungrouped
    /// sentinel.
    ///
    /// Fails with [`GroupOpError::NotFound`] if the group row does not exist
    /// and [`GroupOpError::EmptyMembers`] if its membership list is empty.
    /// Returns the member ids that were reset.
    pub async fn clear_group(
        &self,
        day: NaiveDate,
        bus_id: &str,
    ) -> Result<Vec<String>, GroupOpError> {
        let timer = QueryTimer::new("clear_group");
        let mut tx = self.pool.begin().await?;

        let document_ids = sqlx::query_scalar::<_, Vec<String>>(
            r#"
            SELECT document_ids
            FROM bus_groups
            WHERE bus_id = $1
            "#,
        )
        .bind(bus_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(GroupOpError::NotFound)?;

        if document_ids.is_empty() {
            return Err(GroupOpError::EmptyMembers);
        }

        for doc_id in &document_ids {
            sqlx::query(
                r#"
                UPDATE signups
                SET group_id = $3, updated_at = NOW()
                WHERE day = $1 AND doc_id = $2
                "#,
            )
            .bind(day)
            .bind(doc_id)
            .bind(GROUP_NONE)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            DELETE FROM bus_groups
            WHERE bus_id = $1
            "#,
        )
        .bind(bus_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(document_ids)
    }
}
