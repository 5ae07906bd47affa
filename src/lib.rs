//! qalog-store: PostgreSQL persistence for the QA and voice pipeline
//!
//! Structured logs produced by the question-answering and voice
//! interaction pipeline land in four append-only tables; quiz questions
//! are additionally read back by session correlation id. Every operation
//! is a single parameterized statement over a pooled connection — no
//! cross-call state, no transactions spanning operations.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::StoreConfig;
pub use db::Store;
pub use error::{Result, StoreError};
pub use models::{NewDocumentStoreLog, NewQaLog, NewQaVoiceLog, NewQuestion, QuestionRecord};
