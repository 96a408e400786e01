//! Signup repository for database operations.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::entities::SignupEntity;
use crate::metrics::QueryTimer;

/// Repository for signup-related database operations, all scoped to a day.
#[derive(Clone)]
pub struct SignupRepository {
    pool: PgPool,
}

impl SignupRepository {
    /// Creates a new SignupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a signup for the given day, overwriting an existing row with
    /// the same document id wholesale (the source store's document `set`
    /// semantics: a re-signup also clears any group assignment).
    pub async fn create(
        &self,
        day: NaiveDate,
        doc_id: &str,
        firstname: &str,
        lastname: &str,
        location: &str,
        time: &str,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("create_signup");
        sqlx::query(
            r#"
            INSERT INTO signups (day, doc_id, firstname, lastname, location, pickup_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (day, doc_id) DO UPDATE
            SET firstname = EXCLUDED.firstname,
                lastname = EXCLUDED.lastname,
                location = EXCLUDED.location,
                pickup_time = EXCLUDED.pickup_time,
                group_id = NULL,
                updated_at = NOW()
            "#,
        )
        .bind(day)
        .bind(doc_id)
        .bind(firstname)
        .bind(lastname)
        .bind(location)
        .bind(time)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Find a signup by document id within a day.
    pub async fn find_by_id(
        &self,
        day: NaiveDate,
        doc_id: &str,
    ) -> Result<Option<SignupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_signup_by_id");
        let result = sqlx::query_as::<_, SignupEntity>(
            r#"
            SELECT day, doc_id, firstname, lastname, location, pickup_time, group_id, created_at, updated_at
            FROM signups
            WHERE day = $1 AND doc_id = $2
            "#,
        )
        .bind(day)
        .bind(doc_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List every signup registered for the given day.
    pub async fn list_for_day(&self, day: NaiveDate) -> Result<Vec<SignupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_signups_for_day");
        let result = sqlx::query_as::<_, SignupEntity>(
            r#"
            SELECT day, doc_id, firstname, lastname, location, pickup_time, group_id, created_at, updated_at
            FROM signups
            WHERE day = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a signup's location and time. Returns the number of affected
    /// rows; zero means the document id does not exist for that day.
    pub async fn update(
        &self,
        day: NaiveDate,
        doc_id: &str,
        location: &str,
        time: &str,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_signup");
        let result = sqlx::query(
            r#"
            UPDATE signups
            SET location = $3, pickup_time = $4, updated_at = NOW()
            WHERE day = $1 AND doc_id = $2
            "#,
        )
        .bind(day)
        .bind(doc_id)
        .bind(location)
        .bind(time)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Delete a signup. Returns the number of affected rows; zero means the
    /// document id does not exist for that day.
    pub async fn delete(&self, day: NaiveDate, doc_id: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_signup");
        let result = sqlx::query(
            r#"
            DELETE FROM signups
            WHERE day = $1 AND doc_id = $2
            "#,
        )
        .bind(day)
        .bind(doc_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: SignupRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
