use crate::catalog::{CatalogEntry, Rating, MAX_SUBJECTS};
use std::fmt;
use std::str::FromStr;

/// Columns of the dashboard table that can be edited in place, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    RatingsAverage,
    AuthorName,
    Title,
    FirstPublishYear,
    Subjects,
    AuthorBirthDate,
    AuthorTopWork,
}

impl EditableField {
    pub const ALL: [EditableField; 7] = [
        EditableField::RatingsAverage,
        EditableField::AuthorName,
        EditableField::Title,
        EditableField::FirstPublishYear,
        EditableField::Subjects,
        EditableField::AuthorBirthDate,
        EditableField::AuthorTopWork,
    ];

    /// Form field name
    pub fn name(self) -> &'static str {
        match self {
            EditableField::RatingsAverage => "ratings_average",
            EditableField::AuthorName => "author_name",
            EditableField::Title => "title",
            EditableField::FirstPublishYear => "first_publish_year",
            EditableField::Subjects => "subject",
            EditableField::AuthorBirthDate => "author_birth_date",
            EditableField::AuthorTopWork => "author_top_work",
        }
    }

    /// Column header
    pub fn label(self) -> &'static str {
        match self {
            EditableField::RatingsAverage => "Ratings Average",
            EditableField::AuthorName => "Author Name",
            EditableField::Title => "Title",
            EditableField::FirstPublishYear => "First Publish Year",
            EditableField::Subjects => "Subject",
            EditableField::AuthorBirthDate => "Author Birth Date",
            EditableField::AuthorTopWork => "Author Top Work",
        }
    }

    /// Cell text for a saved entry
    pub fn display(self, entry: &CatalogEntry) -> String {
        match self {
            EditableField::RatingsAverage => entry.ratings_average.to_string(),
            EditableField::AuthorName => entry.author_name.clone().unwrap_or_default(),
            EditableField::Title => entry.title.clone(),
            EditableField::FirstPublishYear => entry
                .first_publish_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            EditableField::Subjects => entry.subjects_display(),
            EditableField::AuthorBirthDate => entry.author_birth_date.clone().unwrap_or_default(),
            EditableField::AuthorTopWork => entry.author_top_work.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditableField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditableField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Scratch copy of the row being edited. Every field is held as the text in
/// its input; typed values are rebuilt on save.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub row: usize,
    ratings_average: String,
    author_name: String,
    title: String,
    first_publish_year: String,
    subjects: String,
    author_birth_date: String,
    author_top_work: String,
}

impl EditBuffer {
    pub fn capture(row: usize, entry: &CatalogEntry) -> Self {
        Self {
            row,
            ratings_average: EditableField::RatingsAverage.display(entry),
            author_name: EditableField::AuthorName.display(entry),
            title: EditableField::Title.display(entry),
            first_publish_year: EditableField::FirstPublishYear.display(entry),
            subjects: EditableField::Subjects.display(entry),
            author_birth_date: EditableField::AuthorBirthDate.display(entry),
            author_top_work: EditableField::AuthorTopWork.display(entry),
        }
    }

    fn slot(&mut self, field: EditableField) -> &mut String {
        match field {
            EditableField::RatingsAverage => &mut self.ratings_average,
            EditableField::AuthorName => &mut self.author_name,
            EditableField::Title => &mut self.title,
            EditableField::FirstPublishYear => &mut self.first_publish_year,
            EditableField::Subjects => &mut self.subjects,
            EditableField::AuthorBirthDate => &mut self.author_birth_date,
            EditableField::AuthorTopWork => &mut self.author_top_work,
        }
    }

    pub fn value(&self, field: EditableField) -> &str {
        match field {
            EditableField::RatingsAverage => &self.ratings_average,
            EditableField::AuthorName => &self.author_name,
            EditableField::Title => &self.title,
            EditableField::FirstPublishYear => &self.first_publish_year,
            EditableField::Subjects => &self.subjects,
            EditableField::AuthorBirthDate => &self.author_birth_date,
            EditableField::AuthorTopWork => &self.author_top_work,
        }
    }

    pub fn set(&mut self, field: EditableField, value: String) {
        *self.slot(field) = value;
    }

    /// Rebuild `entry` with the edited values. Key and author reference are
    /// not editable and carry over.
    pub fn apply_to(&self, entry: &CatalogEntry) -> CatalogEntry {
        CatalogEntry {
            key: entry.key.clone(),
            title: self.title.clone(),
            first_publish_year: self.first_publish_year.trim().parse().ok(),
            ratings_average: Rating::parse_lenient(&self.ratings_average),
            subjects: split_subjects(&self.subjects),
            author_key: entry.author_key.clone(),
            author_name: non_empty(&self.author_name),
            author_birth_date: non_empty(&self.author_birth_date),
            author_top_work: non_empty(&self.author_top_work),
        }
    }
}

/// Split comma-separated subject text into at most three trimmed tags
pub fn split_subjects(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(MAX_SUBJECTS)
        .map(str::to_string)
        .collect()
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
