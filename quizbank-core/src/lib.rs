//! quizbank-core: question storage and query semantics
//!
//! - `model`: the `Question` entity and its write payloads
//! - `error`: validation failures for write payloads
//! - `repository`: the `QuestionStore` seam and its in-memory implementation
//! - `service`: tag filtering and count limiting over a store

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use error::ValidationError;
pub use model::{Question, QuestionDraft, QuestionId, QuestionInput};
pub use repository::{InMemoryStore, QuestionStore};
pub use service::{QuestionFilter, QuestionService};
