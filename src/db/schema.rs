//! Idempotent schema setup for the log tables
//!
//! Every statement uses IF NOT EXISTS, so repeated startup across
//! process restarts (or racing first-time initializations from several
//! processes) leaves existing tables and data untouched.
//!
//! The column sets and defaults below are a compatibility surface other
//! pipeline components read and write directly; do not reshape them.

use sqlx::PgPool;

use crate::error::{Result, StoreError};

/// Create the four log tables and their indexes if absent.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Ensuring log store schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qa_logs (
            id SERIAL PRIMARY KEY,
            model_name TEXT DEFAULT 'langchain',
            uuid_number TEXT,
            query TEXT,
            paraphrased_query TEXT,
            response TEXT,
            source_text TEXT,
            error_message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::schema)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qa_voice_logs (
            id SERIAL PRIMARY KEY,
            uuid_number TEXT,
            input_language TEXT DEFAULT 'en',
            output_format TEXT DEFAULT 'TEXT',
            query TEXT,
            query_in_english TEXT,
            paraphrased_query TEXT,
            response TEXT,
            response_in_english TEXT,
            audio_output_link TEXT,
            source_text TEXT,
            error_message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::schema)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS document_store_logs (
            id SERIAL PRIMARY KEY,
            description TEXT,
            uuid_number TEXT,
            documents_list TEXT[],
            error_message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::schema)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            option1 TEXT NOT NULL,
            option2 TEXT NOT NULL,
            option3 TEXT NOT NULL,
            option4 TEXT NOT NULL,
            answer TEXT NOT NULL,
            uuid_number TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(StoreError::schema)?;

    create_indexes(pool).await?;

    tracing::info!("Log store schema ready");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    // All four tables are correlated by uuid_number; the questions read
    // path filters on it directly
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_qa_logs_uuid ON qa_logs(uuid_number)")
        .execute(pool)
        .await
        .map_err(StoreError::schema)?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_qa_voice_logs_uuid ON qa_voice_logs(uuid_number)")
        .execute(pool)
        .await
        .map_err(StoreError::schema)?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_document_store_logs_uuid ON document_store_logs(uuid_number)",
    )
    .execute(pool)
    .await
    .map_err(StoreError::schema)?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_uuid ON questions(uuid_number)")
        .execute(pool)
        .await
        .map_err(StoreError::schema)?;

    Ok(())
}
