#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Dashboard session state machine.
//!
//! [`DashboardSession`] is the one stateful coordinator in the core: it
//! owns the record store, the committed [`FilterSpec`], the [`ViewMode`],
//! and the current page, and exposes the four transitions the
//! presentation layer may invoke. Every read recomputes its derived view
//! synchronously through the pure pipeline functions; nothing is cached.

pub mod draft;

pub use draft::FilterDraft;

use boston_shootings_models::{
    DEFAULT_PAGE_SIZE, FilterSpec, IncidentRecord, ViewMode, YearCount,
};
use boston_shootings_pipeline::{aggregate, filter, paginate};
use boston_shootings_source::RecordSource;

/// The current page of the visible set plus the metadata the pager and
/// results header render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Records on the current page.
    pub items: Vec<IncidentRecord>,
    /// 0-based inclusive start index into the visible set.
    pub start_index: usize,
    /// 0-based exclusive end index into the visible set.
    pub end_index: usize,
    /// Total page count, never zero.
    pub total_pages: usize,
    /// Current 1-indexed page.
    pub current_page: usize,
}

/// Session state for one dashboard load.
///
/// The record store is write-once per fetch: [`DashboardSession::load`]
/// replaces it wholesale, and nothing mutates it afterwards. Filter and
/// view state change only through the explicit transition methods, each
/// of which keeps `current_page` within `[1, total_pages]`.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    records: Vec<IncidentRecord>,
    filters: FilterSpec,
    view_mode: ViewMode,
    current_page: usize,
    page_size: usize,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    /// Creates an empty session with default filter and view state. The
    /// dashboard renders from this until the initial fetch resolves.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            filters: FilterSpec::new(),
            view_mode: ViewMode::Card,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates a session over an already-fetched record set.
    #[must_use]
    pub fn with_records(records: Vec<IncidentRecord>) -> Self {
        let mut session = Self::new();
        session.replace_records(records);
        session
    }

    /// Overrides the page size. Intended for tests and embedders with
    /// non-default card grids.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        self.page_size = page_size;
        self
    }

    /// Fetches the record set from `source` and replaces the store.
    ///
    /// On failure the error is logged and the store keeps its previous
    /// (possibly empty) contents; errors never reach the presentation
    /// layer.
    pub async fn load(&mut self, source: &dyn RecordSource) {
        match source.fetch().await {
            Ok(records) => self.replace_records(records),
            Err(err) => {
                log::error!("{}: fetch failed, keeping current store: {err}", source.id());
            }
        }
    }

    /// Replaces the record store wholesale and rewinds to the first page.
    pub fn replace_records(&mut self, records: Vec<IncidentRecord>) {
        self.records = records;
        self.current_page = 1;
    }

    /// Commits a staged filter specification, replacing the previous one
    /// atomically, and rewinds to the first page.
    pub fn apply_filters(&mut self, spec: FilterSpec) {
        self.filters = spec;
        self.current_page = 1;
    }

    /// Resets the filter specification to the identity filter and rewinds
    /// to the first page.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.current_page = 1;
    }

    /// Switches the presentation mode and rewinds to the first page.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.current_page = 1;
    }

    /// Navigates to `target`, clamped to `[1, total_pages]` as computed
    /// from the current filter specification.
    pub fn goto_page(&mut self, target: usize) {
        self.current_page = target.clamp(1, self.total_pages());
    }

    /// Navigates to the first page.
    pub fn first_page(&mut self) {
        self.goto_page(1);
    }

    /// Navigates one page back, stopping at the first.
    pub fn prev_page(&mut self) {
        self.goto_page(self.current_page.saturating_sub(1));
    }

    /// Navigates one page forward, stopping at the last.
    pub fn next_page(&mut self) {
        self.goto_page(self.current_page + 1);
    }

    /// Navigates to the last page under the current filters.
    pub fn last_page(&mut self) {
        self.goto_page(self.total_pages());
    }

    /// The records passing the current filter specification, in store
    /// order (newest first as fetched).
    #[must_use]
    pub fn visible(&self) -> Vec<&IncidentRecord> {
        filter::visible(&self.records, &self.filters)
    }

    /// The current page of the visible set. The graph view ignores this
    /// and renders over [`Self::visible`] directly.
    #[must_use]
    pub fn page(&self) -> PageSnapshot {
        let visible = self.visible();
        let view = paginate::page_view(&visible, self.current_page, self.page_size);
        PageSnapshot {
            items: view.items.iter().map(|record| (*record).clone()).collect(),
            start_index: view.start_index,
            end_index: view.end_index,
            total_pages: view.total_pages,
            current_page: self.current_page,
        }
    }

    /// The per-year chart series over the visible set.
    #[must_use]
    pub fn year_series(&self) -> Vec<YearCount> {
        aggregate::by_year(&self.visible())
    }

    /// The distinct years in the store, newest first, for the filter
    /// sidebar's year checkboxes.
    #[must_use]
    pub fn year_options(&self) -> Vec<String> {
        filter::year_options(&self.records)
    }

    /// Total pages under the current filter specification. Never zero.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.visible().len().div_ceil(self.page_size).max(1)
    }

    /// The current 1-indexed page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The current presentation mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The committed filter specification.
    #[must_use]
    pub const fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Number of records in the store, ignoring filters.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
