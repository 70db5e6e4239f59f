// Test support utilities for both unit and integration tests

use crate::catalog::{
    AuthorCredit, AuthorRecord, CatalogError, CatalogSource, SubjectPage, SubjectQuery, Work,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// In-memory catalog for testing
///
/// Serves a fixed list of works with limit/offset paging and a
/// case-insensitive author-name filter, and records every author lookup.
#[derive(Default)]
pub struct MockCatalog {
    works: Vec<Work>,
    authors: HashMap<String, AuthorRecord>,
    failing_authors: HashSet<String>,
    stalled_authors: HashSet<String>,
    fail_subject: bool,
    author_barrier: Option<Arc<Barrier>>,
    authors_in_flight: AtomicUsize,
    peak_authors_in_flight: AtomicUsize,
    subject_queries: Mutex<Vec<SubjectQuery>>,
    author_lookups: Mutex<Vec<String>>,
}

impl MockCatalog {
    /// Create an empty mock catalog
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a work credited to `author_key` (or to nobody)
    pub fn with_work(mut self, title: &str, author_key: Option<&str>, author_name: &str) -> Self {
        let index = self.works.len();
        self.works.push(Work {
            key: format!("/works/OL{}W", index + 1),
            title: title.to_string(),
            first_publish_year: Some(1950 + index as i32),
            ratings_average: None,
            subject: Some(vec![
                "Science fiction".to_string(),
                "Fiction".to_string(),
                "Space".to_string(),
                "Robots".to_string(),
            ]),
            authors: vec![AuthorCredit {
                key: author_key.map(str::to_string),
                name: Some(author_name.to_string()),
            }],
        });
        self
    }

    /// Add a fully specified work
    pub fn with_raw_work(mut self, work: Work) -> Self {
        self.works.push(work);
        self
    }

    /// Add `count` works all credited to the same author
    pub fn with_works(mut self, count: usize, author_key: &str, author_name: &str) -> Self {
        for i in 0..count {
            self = self.with_work(&format!("Work {}", i + 1), Some(author_key), author_name);
        }
        self
    }

    pub fn with_author(mut self, author_key: &str, record: AuthorRecord) -> Self {
        self.authors.insert(author_key.to_string(), record);
        self
    }

    /// Make lookups of `author_key` fail with a server error
    pub fn with_failing_author(mut self, author_key: &str) -> Self {
        self.failing_authors.insert(author_key.to_string());
        self
    }

    /// Make lookups of `author_key` never complete
    pub fn with_stalled_author(mut self, author_key: &str) -> Self {
        self.stalled_authors.insert(author_key.to_string());
        self
    }

    /// Hold every author lookup until `count` lookups are waiting together
    pub fn with_author_barrier(mut self, count: usize) -> Self {
        self.author_barrier = Some(Arc::new(Barrier::new(count)));
        self
    }

    /// Most author lookups that were running at the same time
    pub fn peak_authors_in_flight(&self) -> usize {
        self.peak_authors_in_flight.load(Ordering::SeqCst)
    }

    /// Make the subject listing itself fail
    pub fn with_failing_subject(mut self) -> Self {
        self.fail_subject = true;
        self
    }

    pub fn author_lookups(&self) -> Vec<String> {
        self.author_lookups.lock().unwrap().clone()
    }

    pub fn subject_queries(&self) -> Vec<SubjectQuery> {
        self.subject_queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CatalogSource for MockCatalog {
    async fn subject_page(&self, query: &SubjectQuery) -> Result<SubjectPage, CatalogError> {
        self.subject_queries.lock().unwrap().push(query.clone());

        if self.fail_subject {
            return Err(CatalogError::Status {
                status: 500,
                url: "mock://subjects/science_fiction.json".to_string(),
            });
        }

        let needle = query.author.to_lowercase();
        let matching: Vec<&Work> = self
            .works
            .iter()
            .filter(|work| {
                needle.is_empty()
                    || work.authors.iter().any(|credit| {
                        credit
                            .name
                            .as_deref()
                            .is_some_and(|name| name.to_lowercase().contains(&needle))
                    })
            })
            .collect();

        let works = matching
            .iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .map(|work| (*work).clone())
            .collect();

        Ok(SubjectPage {
            works,
            work_count: matching.len() as u64,
        })
    }

    async fn author(&self, author_key: &str) -> Result<AuthorRecord, CatalogError> {
        self.author_lookups
            .lock()
            .unwrap()
            .push(author_key.to_string());

        let in_flight = self.authors_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_authors_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);

        if let Some(barrier) = &self.author_barrier {
            barrier.wait().await;
        }
        if self.stalled_authors.contains(author_key) {
            futures::future::pending::<()>().await;
        }

        let result = if self.failing_authors.contains(author_key) {
            Err(CatalogError::Status {
                status: 503,
                url: format!("mock:/{}.json", author_key),
            })
        } else {
            self.authors
                .get(author_key)
                .cloned()
                .ok_or_else(|| CatalogError::NotFound(format!("mock:/{}.json", author_key)))
        };

        self.authors_in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
