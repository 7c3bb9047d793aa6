// medistage-core/src/infrastructure/adapters/postgres.rs
//
// PostgreSQL adapter for the StagingStore port. Validation procedures are
// plain SQL functions returning INTEGER; the ReturnStatus output of the
// original stored-procedure contract maps to the function's return value.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::MedistageError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::store::StagingStore;

pub struct PgStagingStore {
    pool: PgPool,
}

impl PgStagingStore {
    /// Connect to the staging database. One validation run owns one
    /// connection, so the pool is capped at a single slot; this also makes
    /// session-level `SET statement_timeout` stick for the whole run.
    pub async fn connect(database_url: &str) -> Result<Self, InfrastructureError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(DatabaseError::Sqlx)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn procedure_call_sql(qualified_name: &str) -> String {
    format!("SELECT {qualified_name}() AS return_status")
}

#[async_trait]
impl StagingStore for PgStagingStore {
    async fn set_command_timeout(&self, seconds: u32) -> Result<(), MedistageError> {
        let sql = format!("SET statement_timeout = '{seconds}s'");
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn query_scalar(&self, sql: &str) -> Result<Option<i64>, MedistageError> {
        let value = sqlx::query_scalar::<_, Option<i64>>(sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value.flatten())
    }

    async fn call_procedure(&self, qualified_name: &str) -> Result<Option<i32>, MedistageError> {
        let sql = procedure_call_sql(qualified_name);
        let value = sqlx::query_scalar::<_, Option<i32>>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value.flatten())
    }

    async fn execute(&self, sql: &str) -> Result<(), MedistageError> {
        sqlx::query(sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn disconnect(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
        }
    }
}
