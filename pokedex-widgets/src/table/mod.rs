//! Catalog table widget.
//!
//! [`TableWidget`] owns the query state, the fetched rows, and the row
//! selection for a data table over the creature catalog. User input maps to
//! query transitions; [`TableWidget::refresh`] issues one coherent fetch for
//! the current query state and applies the outcome.
//!
//! Every transition bumps a fetch generation. A fetch snapshots the
//! generation when it starts and its response is applied only if the
//! generation still matches when it arrives, so a response overtaken by
//! newer input is discarded instead of overwriting newer state. In-flight
//! requests are never cancelled and nothing is retried; a failed fetch
//! surfaces an error string and clears the rows until the next transition.

mod query;
mod sort;

pub use query::{Column, Direction, PAGE_SIZE_OPTIONS, TableQuery};
pub use sort::sort_rows;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc;

use pokedex_lib::PokedexClient;
use pokedex_lib::error::Error;
use pokedex_lib::model::{NamedResource, Row};

use crate::debounce::Debouncer;
use crate::selection::Selection;

/// Internal state for the table widget.
#[derive(Debug, Default)]
struct TableInner {
    /// Query parameters governing the next fetch.
    query: TableQuery,
    /// Rows currently in hand, already sorted.
    rows: Vec<Row>,
    /// Selected row names, independent of fetched data.
    selection: Selection<String>,
    /// Type names for the filter control.
    type_options: Vec<String>,
    /// True while a fetch is in flight.
    loading: bool,
    /// User-facing error from the last fetch, if it failed.
    error: Option<String>,
    /// Fetch generation; bumped by every query transition.
    generation: u64,
}

/// A data table over the creature catalog with search, type filtering,
/// column sort, pagination, and multi-row selection.
///
/// The widget is a cheap-to-clone handle around shared state, so a clone
/// can be moved into a spawned fetch task while the original keeps serving
/// reads and transitions.
///
/// # Example
///
/// ```ignore
/// let table = TableWidget::new(PokedexClient::new());
///
/// table.load_type_options().await;
/// table.refresh().await;
///
/// table.sort_on(Column::Weight);
/// table.refresh().await;
///
/// for row in table.rows() {
///     println!("{} {}", row.name, row.weight);
/// }
/// ```
#[derive(Clone)]
pub struct TableWidget {
    client: PokedexClient,
    inner: Arc<RwLock<TableInner>>,
}

impl TableWidget {
    /// Creates a table widget over the given catalog client.
    pub fn new(client: PokedexClient) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(TableInner::default())),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The rows currently in hand, in display order.
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|inner| inner.rows.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the current query state.
    pub fn query(&self) -> TableQuery {
        self.inner
            .read()
            .map(|inner| inner.query.clone())
            .unwrap_or_default()
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|inner| inner.loading).unwrap_or(false)
    }

    /// The user-facing error from the last fetch, if it failed.
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|inner| inner.error.clone())
            .unwrap_or(None)
    }

    /// Type names for the filter control.
    pub fn type_options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.type_options.clone())
            .unwrap_or_default()
    }

    /// Whether pagination controls should be shown.
    ///
    /// Hidden while a search is active: an exact-match search yields a
    /// single record, not a page.
    pub fn pagination_visible(&self) -> bool {
        self.inner
            .read()
            .map(|inner| !inner.query.is_search_active())
            .unwrap_or(true)
    }

    /// Selected row names, in selection order.
    pub fn selected(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.selection.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// Check if a row name is selected.
    pub fn is_selected(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.selection.is_selected(name))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Query transitions
    //
    // Each transition bumps the fetch generation, invalidating whatever
    // fetch may still be in flight. Callers follow a transition with
    // `refresh()` to load matching data.
    // -------------------------------------------------------------------------

    /// Sets the search term; the page index resets to 0.
    pub fn set_search(&self, term: impl Into<String>) {
        let term = term.into();
        self.transition(|query| query.set_search(term));
    }

    /// Clears the search term, reverting to paged fetching.
    pub fn clear_search(&self) {
        self.transition(TableQuery::clear_search);
    }

    /// Sets or clears the type filter; the page index resets to 0.
    pub fn set_type_filter(&self, filter: Option<String>) {
        self.transition(|query| query.set_type_filter(filter));
    }

    /// Requests ordering on a column (toggles direction on the active one).
    pub fn sort_on(&self, column: Column) {
        self.transition(|query| query.sort_on(column));
    }

    /// Sets the zero-based page index.
    pub fn set_page(&self, page: usize) {
        self.transition(|query| query.set_page(page));
    }

    /// Sets the page size; the page index resets to 0.
    pub fn set_page_size(&self, size: usize) {
        self.transition(|query| query.set_page_size(size));
    }

    fn transition(&self, apply: impl FnOnce(&mut TableQuery)) {
        if let Ok(mut inner) = self.inner.write() {
            apply(&mut inner.query);
            inner.generation += 1;
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggles selection of a row name.
    pub fn toggle_selected(&self, name: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.selection.toggle(name.into());
        }
    }

    /// Destructive select-all over the currently visible rows.
    ///
    /// When `checked`, the selection becomes exactly the names of the rows
    /// currently in hand, discarding selections made on other pages; when
    /// unchecked, the selection is cleared entirely.
    pub fn select_all_visible(&self, checked: bool) {
        if let Ok(mut inner) = self.inner.write() {
            if checked {
                let names: Vec<String> = inner.rows.iter().map(|row| row.name.clone()).collect();
                inner.selection.select_exactly(names);
            } else {
                inner.selection.clear();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Fetches rows for the current query state and applies the outcome,
    /// unless a newer transition has happened in the meantime.
    pub async fn refresh(&self) {
        let (generation, query) = match self.inner.write() {
            Ok(mut inner) => {
                inner.loading = true;
                (inner.generation, inner.query.clone())
            }
            Err(_) => return,
        };

        debug!("table fetch start (generation {generation}): {query:?}");
        let outcome = self.fetch_rows(&query).await;

        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if inner.generation != generation {
            // A newer transition owns the loading flag and the next apply.
            debug!("discarding stale table fetch (generation {generation})");
            return;
        }

        inner.loading = false;
        match outcome {
            Ok(mut rows) => {
                sort_rows(&mut rows, query.order_by(), query.order());
                inner.rows = rows;
                inner.error = None;
            }
            Err(err) => {
                warn!("table fetch failed: {err}");
                inner.rows.clear();
                inner.error = Some(user_message(&err));
            }
        }
    }

    /// Issues the one coherent request the current query state calls for.
    async fn fetch_rows(&self, query: &TableQuery) -> Result<Vec<Row>, Error> {
        if let Some(term) = query.search_term() {
            let pokemon = self.client.pokemon_by_name(term).await?;
            Ok(vec![Row::from(pokemon)])
        } else if let Some(kind) = query.type_filter() {
            let detail = self.client.type_detail(kind).await?;
            let refs: Vec<NamedResource> = detail
                .pokemon
                .into_iter()
                .map(|member| member.pokemon)
                .skip(query.offset())
                .take(query.page_size())
                .collect();
            self.client.resolve_rows(&refs).await
        } else {
            let page = self
                .client
                .list_pokemon(query.offset(), query.page_size())
                .await?;
            self.client.resolve_rows(&page.results).await
        }
    }

    /// Loads the type list for the filter control.
    ///
    /// A failure leaves the current options untouched; the filter control
    /// simply stays as it was.
    pub async fn load_type_options(&self) {
        match self.client.list_types().await {
            Ok(page) => {
                if let Ok(mut inner) = self.inner.write() {
                    inner.type_options = page.results.into_iter().map(|r| r.name).collect();
                }
            }
            Err(err) => warn!("type list fetch failed: {err}"),
        }
    }

    /// Returns a handle for keystroke-driven search input.
    ///
    /// Submissions are coalesced: only the value that survives a quiet
    /// window of `delay` updates the search term and triggers a refresh.
    /// Intermediate keystrokes never trigger a request.
    pub fn search_input(&self, delay: Duration) -> SearchInput {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let widget = self.clone();
        tokio::spawn(async move {
            while let Some(term) = rx.recv().await {
                widget.set_search(term);
                widget.refresh().await;
            }
        });
        SearchInput {
            debouncer: Debouncer::new(delay, tx),
        }
    }
}

/// Debounced entry point for search keystrokes.
///
/// Created by [`TableWidget::search_input`]. Dropping the handle cancels
/// any pending submission.
#[derive(Debug)]
pub struct SearchInput {
    debouncer: Debouncer<String>,
}

impl SearchInput {
    /// Feeds the current value of the search field.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.debouncer.submit(term.into());
    }
}

fn user_message(error: &Error) -> String {
    if error.is_not_found() {
        "Pokémon not found".to_string()
    } else {
        "Failed to load Pokémon data".to_string()
    }
}
