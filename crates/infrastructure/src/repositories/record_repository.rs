use async_trait::async_trait;
use cascade_dns_application::ports::RecordRepository;
use cascade_dns_domain::{AuthoritativeRecord, DomainError, RecordFilter, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (
    i64,
    String,
    String,
    String,
    i64,
    Option<i64>,
    String,
    String,
);

const RECORD_COLUMNS: &str =
    "id, domain, record_type, value, ttl, priority, created_at, updated_at";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<AuthoritativeRecord, DomainError> {
        let (id, domain, record_type, value, ttl, priority, created_at, updated_at) = row;
        let record_type = record_type.parse::<RecordType>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "record {} has unknown type '{}'",
                id, record_type
            ))
        })?;

        Ok(AuthoritativeRecord {
            id: Some(id),
            domain,
            record_type,
            value,
            ttl: u32::try_from(ttl).unwrap_or(0),
            priority: priority.and_then(|p| u16::try_from(p).ok()),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        })
    }

    fn rows_to_records(rows: Vec<RecordRow>) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        rows.into_iter().map(Self::row_to_record).collect()
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records WHERE domain = ? AND record_type = ? ORDER BY id ASC",
            RECORD_COLUMNS
        ))
        .bind(domain)
        .bind(record_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &RecordFilter) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        let record_type = filter.record_type.map(|rt| rt.as_str());

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records
             WHERE (?1 IS NULL OR domain = ?1)
               AND (?2 IS NULL OR record_type = ?2)
               AND (?3 IS NULL OR value = ?3)
             ORDER BY domain ASC, id ASC",
            RECORD_COLUMNS
        ))
        .bind(filter.domain.as_deref())
        .bind(record_type)
        .bind(filter.value.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        record: AuthoritativeRecord,
    ) -> Result<AuthoritativeRecord, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "INSERT INTO dns_records (domain, record_type, value, ttl, priority, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            RECORD_COLUMNS
        ))
        .bind(&record.domain)
        .bind(record.record_type.as_str())
        .bind(&record.value)
        .bind(i64::from(record.ttl))
        .bind(record.priority.map(i64::from))
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::RecordConflict(format!(
                    "{} record '{}' for '{}' already exists",
                    record.record_type, record.value, record.domain
                ))
            } else {
                error!(error = %e, "Failed to create record");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Self::row_to_record(row)
    }

    #[instrument(skip(self))]
    async fn delete_by_domain(&self, domain: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM dns_records WHERE domain = ?")
            .bind(domain)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
