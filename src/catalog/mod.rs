pub mod client;
pub mod fetcher;
pub mod models;

pub use client::{CatalogError, CatalogSource, OpenLibraryClient, SubjectQuery};
pub use fetcher::{fetch_page, PageRequest};
pub use models::{
    AuthorCredit, AuthorInfo, AuthorRecord, CatalogEntry, CatalogPage, PageSize, Rating,
    SubjectPage, Work, MAX_SUBJECTS, UNKNOWN_AUTHOR,
};
