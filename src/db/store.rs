//! The store object - pooled writes and the session-keyed read

use chrono::Utc;
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{NewDocumentStoreLog, NewQaLog, NewQaVoiceLog, NewQuestion, QuestionRecord};

use super::{pool, schema};

/// Pooled data-access object for the QA pipeline log tables.
///
/// Cloning is cheap; the inner pool is shared. Each operation leases a
/// connection for the duration of one statement and returns it on every
/// exit path.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect to the backend and make sure the schema exists.
    ///
    /// Fails fast: an unreachable backend or failing DDL surfaces here,
    /// never at first insert.
    ///
    /// # Errors
    ///
    /// [`StoreError::Connection`] if the pool cannot be established,
    /// [`StoreError::Schema`] if DDL execution fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = pool::create_pool(config).await?;
        schema::ensure_schema(&pool).await?;
        tracing::info!(
            "Connected to {}:{}/{}",
            config.host,
            config.port,
            config.database
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool without touching the schema.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Re-run the idempotent schema setup.
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for leased connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Record one answered query from the QA pipeline.
    ///
    /// `created_at` is generated here as UTC wall-clock time and bound
    /// explicitly; the column's NOW() default is not used for this
    /// insert, so timestamps are immune to client/server zone drift.
    pub async fn insert_qa_log(&self, log: &NewQaLog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO qa_logs
            (model_name, uuid_number, query, paraphrased_query, response, source_text, error_message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&log.model_name)
        .bind(&log.uuid_number)
        .bind(&log.query)
        .bind(&log.paraphrased_query)
        .bind(&log.response)
        .bind(&log.source_text)
        .bind(log.error_message.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write("qa_logs", Some(&log.uuid_number), e))?;

        Ok(())
    }

    /// Record one voice interaction.
    ///
    /// Same timestamp contract as [`Store::insert_qa_log`].
    pub async fn insert_qa_voice_log(&self, log: &NewQaVoiceLog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO qa_voice_logs
            (uuid_number, input_language, output_format, query, query_in_english, paraphrased_query,
             response, response_in_english, audio_output_link, source_text, error_message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&log.uuid_number)
        .bind(&log.input_language)
        .bind(&log.output_format)
        .bind(&log.query)
        .bind(&log.query_in_english)
        .bind(&log.paraphrased_query)
        .bind(&log.response)
        .bind(&log.response_in_english)
        .bind(log.audio_output_link.as_deref())
        .bind(&log.source_text)
        .bind(log.error_message.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write("qa_voice_logs", Some(&log.uuid_number), e))?;

        Ok(())
    }

    /// Record one document-store ingestion event.
    ///
    /// `documents_list` is bound as a native TEXT[] parameter, so order
    /// and embedded quote characters survive exactly as given.
    pub async fn insert_document_store_log(&self, log: &NewDocumentStoreLog) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO document_store_logs
            (description, uuid_number, documents_list, error_message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&log.description)
        .bind(&log.uuid_number)
        .bind(&log.documents_list)
        .bind(log.error_message.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write("document_store_logs", Some(&log.uuid_number), e))?;

        Ok(())
    }

    /// Record one generated quiz question.
    ///
    /// Unlike the log inserts, `created_at` comes from the column's
    /// NOW() default here.
    pub async fn insert_question(&self, question: &NewQuestion) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO questions
            (question, option1, option2, option3, option4, answer, uuid_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&question.question)
        .bind(&question.option1)
        .bind(&question.option2)
        .bind(&question.option3)
        .bind(&question.option4)
        .bind(&question.answer)
        .bind(&question.uuid_number)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::write("questions", Some(&question.uuid_number), e))?;

        Ok(())
    }

    /// Fetch all quiz questions recorded under a session correlation id,
    /// in ascending insert (id) order.
    ///
    /// An unmatched id yields an empty vec, not an error.
    pub async fn get_questions_by_session(&self, uuid_number: &str) -> Result<Vec<QuestionRecord>> {
        sqlx::query_as::<_, QuestionRecord>(
            r#"
            SELECT id, question, option1, option2, option3, option4, answer, uuid_number, created_at
            FROM questions
            WHERE uuid_number = $1
            ORDER BY id ASC
            "#,
        )
        .bind(uuid_number)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::read("questions", e))
    }
}
