use std::sync::{Mutex, MutexGuard, PoisonError};

use dictionary::{LookupResponse, LookupSource};

use crate::render;
use crate::storage::{Storage, LAST_WORD_KEY};
use crate::view::Element;

/// The lookup form and the results container it renders into.
///
/// `submit` takes `&self`, so several lookups may be in flight at once. They
/// are neither queued nor cancelled: whichever finishes last decides what the
/// results show.
pub struct LookupWidget<S> {
    source: S,
    storage: Storage,
    input: Mutex<String>,
    results: Mutex<Element>,
}

impl<S: LookupSource> LookupWidget<S> {
    /// Restoring the last word never starts a lookup.
    pub async fn initialize(source: S, storage: Storage) -> sqlx::Result<Self> {
        let widget = Self {
            source,
            storage,
            input: Mutex::new(String::new()),
            results: Mutex::new(
                Element::new("div")
                    .attr("id", "results")
                    .attr("aria-busy", "false"),
            ),
        };
        if let Some(last) = widget.storage.get_item(LAST_WORD_KEY).await? {
            if !last.is_empty() {
                tracing::debug!(word = %last, "restored last word");
                widget.set_input(last);
            }
        }
        Ok(widget)
    }

    pub fn input_value(&self) -> String {
        lock(&self.input).clone()
    }

    /// Updates the input the way a keystroke would: nothing is persisted.
    pub fn set_input(&self, value: impl Into<String>) {
        *lock(&self.input) = value.into();
    }

    /// Change event: persists the trimmed value.
    pub async fn change_input(&self, value: &str) -> sqlx::Result<()> {
        self.set_input(value);
        self.storage.set_item(LAST_WORD_KEY, value.trim()).await
    }

    pub async fn forget_last_word(&self) -> sqlx::Result<bool> {
        self.storage.remove_item(LAST_WORD_KEY).await
    }

    /// Lookup failures never escape, they become an error card.
    pub async fn submit(&self) {
        let word = self.input_value().trim().to_owned();
        if word.is_empty() {
            tracing::debug!("ignoring blank submission");
            return;
        }

        let _busy = Busy::start(&self.results);
        {
            let mut results = lock(&self.results);
            results.clear();
            results.append(render::looking_up(&word));
        }

        let outcome = self.source.lookup(&word).await;

        let mut results = lock(&self.results);
        results.clear();
        match outcome {
            Ok(LookupResponse::Entries(entries)) => {
                tracing::debug!(%word, entries = entries.len(), "rendering entries");
                for entry in &entries {
                    results.append(render::entry(entry));
                }
            }
            Ok(LookupResponse::Error(payload)) => {
                tracing::debug!(%word, ?payload, "dictionary reported an error");
                results.append(render::api_error(&payload));
            }
            Err(error) => {
                tracing::debug!(%word, %error, "lookup failed");
                results.append(render::network_error());
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.results).get_attribute("aria-busy") == Some("true")
    }

    pub fn results(&self) -> Element {
        lock(&self.results).clone()
    }

    pub fn document(&self) -> Element {
        let form = Element::new("form")
            .attr("id", "search-form")
            .child(
                Element::new("input")
                    .attr("id", "word")
                    .attr("type", "text")
                    .attr("value", self.input_value()),
            )
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .text("Search"),
            );
        Element::new("main").child(form).child(self.results())
    }
}

/// Marks the results container busy until dropped, whichever way the
/// submission ends.
struct Busy<'a> {
    results: &'a Mutex<Element>,
}

impl<'a> Busy<'a> {
    fn start(results: &'a Mutex<Element>) -> Self {
        lock(results).set_attribute("aria-busy", "true");
        Self { results }
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        lock(self.results).set_attribute("aria-busy", "false");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
