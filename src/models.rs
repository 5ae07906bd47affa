//! Typed records for the four log tables.
//!
//! Each insert takes a per-table struct instead of a loose scalar list,
//! so shape errors are caught by the caller's type system before
//! anything reaches the wire. `Option` fields map to nullable columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One answered query from the QA pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQaLog {
    /// Model tag, e.g. "langchain" (also the column default)
    pub model_name: String,
    /// Session correlation id shared across the log tables
    pub uuid_number: String,
    pub query: String,
    pub paraphrased_query: String,
    pub response: String,
    pub source_text: String,
    pub error_message: Option<String>,
}

/// One voice interaction, including translation and audio output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQaVoiceLog {
    pub uuid_number: String,
    /// Input language code, e.g. "en" (the column default)
    pub input_language: String,
    /// Output format tag, "TEXT" or "VOICE" (column default "TEXT")
    pub output_format: String,
    pub query: String,
    pub query_in_english: String,
    pub paraphrased_query: String,
    pub response: String,
    pub response_in_english: String,
    /// Link to generated audio; absent for text-only output
    pub audio_output_link: Option<String>,
    pub source_text: String,
    pub error_message: Option<String>,
}

/// One document-store ingestion event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocumentStoreLog {
    pub description: String,
    pub uuid_number: String,
    /// Ordered document identifiers; stored as a native TEXT[] column
    pub documents_list: Vec<String>,
    pub error_message: Option<String>,
}

/// One generated quiz question
///
/// Every field is required; `questions` is the one table with NOT NULL
/// constraints since it is read back and must be complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub answer: String,
    pub uuid_number: String,
}

/// A quiz question row read back by session id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRecord {
    pub id: i32,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub answer: String,
    pub uuid_number: String,
    pub created_at: DateTime<Utc>,
}
