//! Query shaping over a [`QuestionStore`]
//!
//! Holds no state of its own beyond the injected store.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::model::{Question, QuestionId, QuestionInput};
use crate::repository::QuestionStore;

/// Filters for listing questions
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter<'a> {
    /// Keep only questions carrying this exact tag. Empty means no filter.
    pub tag: Option<&'a str>,
    /// Keep at most this many, after tag filtering.
    pub limit: Option<i64>,
}

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Number of live questions.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// List questions, filtering by tag first and then truncating to `limit`.
    pub fn get_questions(&self, filter: QuestionFilter<'_>) -> Vec<Question> {
        let mut questions = self.store.find_all();

        if let Some(tag) = filter.tag.filter(|t| !t.is_empty()) {
            questions.retain(|q| q.has_tag(tag));
        }

        if let Some(limit) = filter.limit {
            questions.truncate(usize::try_from(limit).unwrap_or(0));
        }

        questions
    }

    pub fn get_question(&self, id: QuestionId) -> Option<Question> {
        self.store.find_by_id(id)
    }

    pub fn get_random_questions(&self, n: i64) -> Vec<Question> {
        self.store.find_random(n)
    }

    pub fn create_question(&self, input: QuestionInput) -> Result<Question, ValidationError> {
        self.store.save(input)
    }

    pub fn modify_question(
        &self,
        id: QuestionId,
        input: QuestionInput,
    ) -> Result<Option<Question>, ValidationError> {
        self.store.update(id, input)
    }

    pub fn delete_question(&self, id: QuestionId) -> Option<Question> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;

    fn service_with(questions: &[(&str, Vec<&str>)]) -> QuestionService {
        let service = QuestionService::new(Arc::new(InMemoryStore::new()));
        for (text, tags) in questions {
            service
                .create_question(QuestionInput {
                    text: Some(text.to_string()),
                    choices: Some(vec!["A".into(), "B".into()]),
                    answer: Some("A".into()),
                    tags: Some(tags.iter().map(|t| t.to_string()).collect()),
                })
                .unwrap();
        }
        service
    }

    fn texts(questions: Vec<Question>) -> Vec<String> {
        questions.into_iter().map(|q| q.text).collect()
    }

    #[test]
    fn no_filter_returns_everything() {
        let service = service_with(&[("a", vec![]), ("b", vec!["x"])]);
        assert_eq!(
            texts(service.get_questions(QuestionFilter::default())),
            vec!["a", "b"]
        );
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let service = service_with(&[
            ("tagged", vec!["math"]),
            ("untagged", vec![]),
            ("upper", vec!["Math"]),
            ("prefix", vec!["mathematics"]),
        ]);

        let filtered = service.get_questions(QuestionFilter {
            tag: Some("math"),
            limit: None,
        });
        assert_eq!(texts(filtered), vec!["tagged"]);
    }

    #[test]
    fn empty_tag_is_ignored() {
        let service = service_with(&[("a", vec![]), ("b", vec!["x"])]);
        let all = service.get_questions(QuestionFilter {
            tag: Some(""),
            limit: None,
        });
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn limit_truncates_keeps_order_and_handles_edges() {
        let service = service_with(&[
            ("q0", vec![]),
            ("q1", vec![]),
            ("q2", vec![]),
            ("q3", vec![]),
            ("q4", vec![]),
        ]);

        let take = |limit| {
            texts(service.get_questions(QuestionFilter {
                tag: None,
                limit: Some(limit),
            }))
        };

        assert_eq!(take(3), vec!["q0", "q1", "q2"]);
        assert_eq!(take(50).len(), 5);
        assert!(take(0).is_empty());
        assert!(take(-1).is_empty());
    }

    #[test]
    fn filter_then_limit() {
        let service = service_with(&[
            ("a", vec!["keep"]),
            ("b", vec![]),
            ("c", vec!["keep"]),
            ("d", vec!["keep"]),
        ]);

        let result = service.get_questions(QuestionFilter {
            tag: Some("keep"),
            limit: Some(2),
        });
        assert_eq!(texts(result), vec!["a", "c"]);
    }

    #[test]
    fn pass_throughs_reach_the_store() {
        let service = service_with(&[("a", vec![])]);
        let id = QuestionId(1);

        assert_eq!(service.get_question(id).unwrap().text, "a");
        assert_eq!(service.get_random_questions(3).len(), 1);

        let updated = service
            .modify_question(
                id,
                QuestionInput {
                    text: Some("b".into()),
                    choices: Some(vec![]),
                    answer: Some("x".into()),
                    tags: None,
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.text, "b");

        assert!(service.delete_question(id).is_some());
        assert!(service.get_question(id).is_none());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn count_tracks_creates_and_deletes() {
        let service = service_with(&[("a", vec![]), ("b", vec![])]);
        assert_eq!(service.count(), 2);

        service.delete_question(QuestionId(1));
        assert_eq!(service.count(), 1);
    }
}
