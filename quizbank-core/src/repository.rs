//! Question repository
//!
//! [`QuestionStore`] is the storage seam the service is built on.
//! [`InMemoryStore`] is the authoritative implementation: a map ordered by
//! id plus the id counter, both behind one lock so every write is a single
//! atomic step.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::ValidationError;
use crate::model::{Question, QuestionDraft, QuestionId, QuestionInput};

/// Primitive storage operations for questions
pub trait QuestionStore: Send + Sync {
    /// All questions in insertion order.
    fn find_all(&self) -> Vec<Question>;

    fn find_by_id(&self, id: QuestionId) -> Option<Question>;

    /// Up to `n` distinct questions sampled uniformly, in no particular order.
    fn find_random(&self, n: i64) -> Vec<Question>;

    /// Validate and store a new question under the next id.
    fn save(&self, input: QuestionInput) -> Result<Question, ValidationError>;

    /// Validate and replace an existing question. `Ok(None)` if the id is unknown.
    fn update(
        &self,
        id: QuestionId,
        input: QuestionInput,
    ) -> Result<Option<Question>, ValidationError>;

    fn delete(&self, id: QuestionId) -> Option<Question>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct StoreInner {
    // Ids are handed out in increasing order, so key order is insertion order.
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

/// Thread-safe in-memory question store
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                questions: BTreeMap::new(),
                next_id: QuestionId::FIRST,
            }),
        }
    }

    /// Random sampling with a caller-supplied generator.
    pub fn find_random_with<R: Rng + ?Sized>(&self, n: i64, rng: &mut R) -> Vec<Question> {
        let amount = usize::try_from(n).unwrap_or(0);
        if amount == 0 {
            return Vec::new();
        }

        let inner = self.read();
        let all: Vec<&Question> = inner.questions.values().collect();
        all.choose_multiple(rng, amount)
            .map(|q| (*q).clone())
            .collect()
    }

    // Every critical section below leaves the map and counter consistent
    // before it can panic, so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for InMemoryStore {
    fn find_all(&self) -> Vec<Question> {
        self.read().questions.values().cloned().collect()
    }

    fn find_by_id(&self, id: QuestionId) -> Option<Question> {
        self.read().questions.get(&id).cloned()
    }

    fn find_random(&self, n: i64) -> Vec<Question> {
        self.find_random_with(n, &mut rand::thread_rng())
    }

    fn save(&self, input: QuestionInput) -> Result<Question, ValidationError> {
        let draft = QuestionDraft::try_from(input)?;

        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id = id.next();

        let question = Question::new(id, draft);
        inner.questions.insert(id, question.clone());
        debug!(%id, "question created");

        Ok(question)
    }

    fn update(
        &self,
        id: QuestionId,
        input: QuestionInput,
    ) -> Result<Option<Question>, ValidationError> {
        let draft = QuestionDraft::try_from(input)?;

        let mut inner = self.write();
        let Some(question) = inner.questions.get_mut(&id) else {
            debug!(%id, "update skipped, question not found");
            return Ok(None);
        };

        question.apply(draft);
        debug!(%id, "question updated");
        Ok(Some(question.clone()))
    }

    fn delete(&self, id: QuestionId) -> Option<Question> {
        let removed = self.write().questions.remove(&id);
        if removed.is_some() {
            debug!(%id, "question deleted");
        }
        removed
    }

    fn len(&self) -> usize {
        self.read().questions.len()
    }
}
