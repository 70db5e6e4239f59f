use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder used for every author field when a work has no author reference
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Number of subject tags kept per entry
pub const MAX_SUBJECTS: usize = 3;

/// Records-per-page choices offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "10" => Ok(PageSize::Ten),
            "50" => Ok(PageSize::Fifty),
            "100" => Ok(PageSize::Hundred),
            other => Err(format!("unsupported page size '{}'", other)),
        }
    }
}

/// Average rating of a work, or the "N/A" sentinel when upstream has none
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    Score(f64),
    #[default]
    NotAvailable,
}

impl Rating {
    pub fn from_upstream(value: Option<f64>) -> Self {
        value.map(Rating::Score).unwrap_or(Rating::NotAvailable)
    }

    /// Parse edited text. Anything that is not a finite number is "N/A".
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => Rating::Score(score),
            _ => Rating::NotAvailable,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Subject listing as returned by `/subjects/{subject}.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubjectPage {
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub work_count: u64,
}

/// One work in a subject listing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    pub first_publish_year: Option<i32>,
    pub ratings_average: Option<f64>,
    pub subject: Option<Vec<String>>,
    #[serde(default)]
    pub authors: Vec<AuthorCredit>,
}

impl Work {
    /// Reference of the first credited author, if it has one
    pub fn primary_author_key(&self) -> Option<&str> {
        self.authors
            .first()
            .and_then(|credit| credit.key.as_deref())
            .filter(|key| !key.is_empty())
    }
}

/// Author credit embedded in a work
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorCredit {
    pub key: Option<String>,
    pub name: Option<String>,
}

/// Author resource as returned by `/authors/{id}.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorRecord {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub top_work: Option<String>,
}

/// Author fields merged into an entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorInfo {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub top_work: Option<String>,
}

impl AuthorInfo {
    pub fn unknown() -> Self {
        Self {
            name: Some(UNKNOWN_AUTHOR.to_string()),
            birth_date: Some(UNKNOWN_AUTHOR.to_string()),
            top_work: Some(UNKNOWN_AUTHOR.to_string()),
        }
    }
}

impl From<AuthorRecord> for AuthorInfo {
    fn from(record: AuthorRecord) -> Self {
        Self {
            name: record.name,
            birth_date: record.birth_date,
            top_work: record.top_work,
        }
    }
}

/// A work enriched with its author, as shown in one dashboard row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    pub title: String,
    pub first_publish_year: Option<i32>,
    pub ratings_average: Rating,
    pub subjects: Vec<String>,
    pub author_key: Option<String>,
    pub author_name: Option<String>,
    pub author_birth_date: Option<String>,
    pub author_top_work: Option<String>,
}

impl CatalogEntry {
    pub fn from_work(work: Work, author: AuthorInfo) -> Self {
        let author_key = work.primary_author_key().map(str::to_string);
        let mut subjects = work.subject.unwrap_or_default();
        subjects.truncate(MAX_SUBJECTS);

        Self {
            key: work.key,
            title: work.title,
            first_publish_year: work.first_publish_year,
            ratings_average: Rating::from_upstream(work.ratings_average),
            subjects,
            author_key,
            author_name: author.name,
            author_birth_date: author.birth_date,
            author_top_work: author.top_work,
        }
    }

    pub fn subjects_display(&self) -> String {
        self.subjects.join(", ")
    }
}

/// One fetched page of entries plus the upstream total used for page math
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub entries: Vec<CatalogEntry>,
    pub total_count: u64,
}
