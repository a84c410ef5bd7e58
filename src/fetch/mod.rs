//! Page fetcher module
//!
//! The extraction loop: request a page, decode it, hand the records out,
//! move the offset forward, repeat until a page comes back empty.
//!
//! # Overview
//!
//! - `PageFetcher` - lazy stream of pages or records over one endpoint
//! - `fetch` - convenience constructor for the common case
//! - `FetchStats` / `Extraction` - what a drained fetch returns
//!
//! Pages are strictly sequential: the next request is only built once the
//! previous one has been decoded. Nothing bounds the number of pages; an
//! endpoint that never returns an empty page yields forever, and the
//! consumer has to stop pulling.

mod types;

pub use types::{Extraction, FetchStats, Page};

use crate::decode::{JsonArrayDecoder, RecordDecoder};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{OffsetPaginator, PaginationState, Paginator};
use crate::types::{PageRequest, Record};
use futures::stream::{self, Stream, TryStreamExt};
use std::time::Instant;
use tracing::{debug, info, info_span, Instrument, Span};

/// Lazy, offset-paginated record source
pub struct PageFetcher {
    /// HTTP client
    client: HttpClient,
    /// First page request
    request: PageRequest,
    /// Pagination strategy
    paginator: Box<dyn Paginator>,
    /// Body decoder
    decoder: Box<dyn RecordDecoder>,
    /// Span every request of this fetcher is recorded under
    span: Span,
}

impl PageFetcher {
    /// Create a fetcher starting at `request`, using `limit`/`offset` query
    /// parameters and JSON array bodies
    pub fn new(client: HttpClient, request: PageRequest) -> Self {
        let span = info_span!(
            "fetch",
            url = %request.url(),
            limit = request.limit,
            start_offset = request.offset
        );
        Self {
            client,
            request,
            paginator: Box::new(OffsetPaginator::default()),
            decoder: Box::new(JsonArrayDecoder::new()),
            span,
        }
    }

    /// Set the pagination strategy
    #[must_use]
    pub fn with_paginator(mut self, paginator: impl Paginator + 'static) -> Self {
        self.paginator = Box::new(paginator);
        self
    }

    /// Set the body decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl RecordDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Record this fetcher's events under `span` instead of its own
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The first page request
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Stream of non-empty pages.
    ///
    /// Ends after the first empty page, or right after yielding an error.
    pub fn pages(&self) -> impl Stream<Item = Result<Page>> + '_ {
        let state = PaginationState::new(self.request.clone());
        stream::try_unfold(state, move |state| {
            self.next_page(state).instrument(self.span.clone())
        })
    }

    /// Stream of records, page after page, in server order
    pub fn records(&self) -> impl Stream<Item = Result<Record>> + '_ {
        self.pages().map_ok(page_records).try_flatten()
    }

    /// Owning variant of [`PageFetcher::pages`]
    pub fn into_pages(self) -> impl Stream<Item = Result<Page>> {
        let state = PaginationState::new(self.request.clone());
        stream::try_unfold((self, state), |(fetcher, state)| async move {
            let span = fetcher.span.clone();
            let next = fetcher.next_page(state).instrument(span).await?;
            Ok::<_, Error>(next.map(|(page, state)| (page, (fetcher, state))))
        })
    }

    /// Owning variant of [`PageFetcher::records`]
    pub fn into_records(self) -> impl Stream<Item = Result<Record>> {
        self.into_pages().map_ok(page_records).try_flatten()
    }

    /// Drain every page into memory.
    ///
    /// Either all records come back or the first error does; records of
    /// earlier pages are dropped on failure.
    pub async fn fetch_all(&self) -> Result<Extraction> {
        let start = Instant::now();
        let mut extraction = Extraction::default();

        let pages = self.pages();
        futures::pin_mut!(pages);
        while let Some(page) = pages.try_next().await? {
            extraction.stats.add_page(page.len());
            extraction.records.extend(page.records);
        }

        extraction
            .stats
            .set_duration(start.elapsed().as_millis() as u64);

        let _entered = self.span.enter();
        info!(
            "Fetched {} records in {} pages",
            extraction.stats.records_fetched, extraction.stats.pages_fetched
        );
        Ok(extraction)
    }

    /// Fetch the page `state` points at and advance the cursor
    async fn next_page(
        &self,
        mut state: PaginationState,
    ) -> Result<Option<(Page, PaginationState)>> {
        if state.done {
            return Ok(None);
        }

        let url = state.request.url();
        let offset = state.offset();
        let params = self.paginator.params(&state);

        let response = self.client.get_page(&url, &params).await?;
        let records = self.decoder.decode(&response.body)?;

        debug!(offset, records = records.len(), "Fetched page");

        let next = self.paginator.process_page(records.len(), &mut state);
        if records.is_empty() {
            debug!(
                offset,
                total = state.total_fetched,
                "Empty page, pagination complete"
            );
            return Ok(None);
        }
        if next.is_done() {
            // the records of this page are still emitted; nothing follows
            debug!(offset, "No further offset, last page");
            state.mark_done();
        }

        let page = Page {
            offset,
            status: response.status.as_u16(),
            records,
        };
        Ok(Some((page, state)))
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("client", &self.client)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

fn page_records(page: Page) -> impl Stream<Item = Result<Record>> {
    stream::iter(page.records.into_iter().map(Ok::<Record, Error>))
}

/// Fetch every record of `base_url + endpoint`, `limit` records per request,
/// starting at `offset`.
///
/// The returned stream is lazy: no request is made until it is polled.
pub fn fetch(
    base_url: &str,
    endpoint: &str,
    limit: u64,
    offset: u64,
) -> Result<impl Stream<Item = Result<Record>>> {
    let client = HttpClient::new()?;
    let request = PageRequest::new(base_url, endpoint)
        .with_limit(limit)
        .with_offset(offset);
    Ok(PageFetcher::new(client, request).into_records())
}
