use crate::catalog::client::{CatalogError, CatalogSource, SubjectQuery};
use crate::catalog::models::{AuthorInfo, CatalogEntry, CatalogPage, PageSize, Work};
use futures::future::try_join_all;
use tracing::{debug, info, warn};

/// What the dashboard asks the catalog for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub page_size: PageSize,
    /// Author-name filter
    pub query: String,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size.get())
    }
}

/// Fetch one page of works and resolve every work's primary author.
///
/// Author lookups run concurrently. The first failed lookup fails the whole
/// page; there is no partial result.
pub async fn fetch_page<S>(source: &S, request: &PageRequest) -> Result<CatalogPage, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    if request.page == 0 {
        return Err(CatalogError::InvalidInput(
            "Page number must be greater than 0".to_string(),
        ));
    }

    let query = SubjectQuery {
        limit: request.page_size.get(),
        offset: request.offset(),
        author: request.query.clone(),
    };

    let subject_page = source.subject_page(&query).await.map_err(|e| {
        warn!("Subject page request failed: {}", e);
        e
    })?;
    let total_count = subject_page.work_count;

    let entries = try_join_all(
        subject_page
            .works
            .into_iter()
            .map(|work| enrich_work(source, work)),
    )
    .await?;

    info!(
        "Loaded page {} ({} entries, {} total)",
        request.page,
        entries.len(),
        total_count
    );

    Ok(CatalogPage {
        entries,
        total_count,
    })
}

async fn enrich_work<S>(source: &S, work: Work) -> Result<CatalogEntry, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let author = match work.primary_author_key() {
        None => {
            debug!("Work {} has no author reference", work.key);
            AuthorInfo::unknown()
        }
        Some(author_key) => source
            .author(author_key)
            .await
            .map(AuthorInfo::from)
            .map_err(|e| {
                warn!("Author lookup {} failed: {}", author_key, e);
                e
            })?,
    };

    Ok(CatalogEntry::from_work(work, author))
}
