//! Delegated paging: the external row source seam.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::filter::FilterState;
use crate::page::PageState;
use crate::row::GridRow;
use crate::sort::SortState;

/// A page request handed to an external row source.
///
/// Carries the full query state — page, filter, sort — so the source owns
/// narrowing and ordering as well as slicing. The grid's local engines
/// never run in delegated mode; a source that ignores `filter`/`sort`
/// simply serves unfiltered pages.
///
/// The `sequence` number identifies the most recently issued request:
/// responses for superseded sequences are dropped on arrival, so a slow
/// fetch can never clobber the state of a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// Monotonically increasing issue number.
    pub sequence: u64,
    /// Requested page index and size.
    pub page: PageState,
    /// Active filter state for the source to apply.
    pub filter: FilterState,
    /// Active sort for the source to apply.
    pub sort: Option<SortState>,
}

/// A page of rows from an external source, with the authoritative page count.
#[derive(Debug, Clone)]
pub struct PageResponse<R> {
    /// The already-sliced rows for the requested page.
    pub rows: Vec<R>,
    /// Total page count as known by the source.
    pub page_count: usize,
}

impl<R> PageResponse<R> {
    /// Create a response.
    pub fn new(rows: Vec<R>, page_count: usize) -> Self {
        Self { rows, page_count }
    }
}

/// An external row source for delegated paging.
///
/// # Example
///
/// ```ignore
/// struct StudentApi { client: Client }
///
/// #[async_trait]
/// impl PageSource<Student> for StudentApi {
///     async fn fetch(&self, request: PageRequest) -> Result<PageResponse<Student>, SourceError> {
///         let page = self.client.students(request.page.index, request.page.size).await?;
///         Ok(PageResponse::new(page.rows, page.page_count))
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource<R>: Send + Sync
where
    R: GridRow,
{
    /// Fetch the rows and page count for a request.
    async fn fetch(&self, request: PageRequest) -> Result<PageResponse<R>, SourceError>;
}
