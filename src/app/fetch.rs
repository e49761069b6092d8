// BilPris - app/fetch.rs
//
// Model-list fetch lifecycle. Each brand change issues exactly one GET
// to the models endpoint on its own background thread, reporting the
// outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `ModelsFetchManager` lives on the UI thread; `run_fetch` runs on a
//     background thread, one per request.
//   - All requests share one channel, so outcomes are delivered in
//     resolution order. Overlapping requests are neither cancelled nor
//     sequenced: when the brand changes again before a prior request
//     resolves, both proceed and the last outcome to arrive determines
//     the rendered state.
//   - No retries and no request timeout: a server that never answers
//     keeps the select in its loading state.

use crate::core::model::{ModelEntry, ModelListResponse, ModelsProgress};
use crate::util::constants::{MAX_FETCH_MESSAGES_PER_FRAME, MODELS_BRAND_PARAM, MODELS_PATH};
use crate::util::error::FetchError;
use std::sync::mpsc;
use std::time::Duration;

/// Manages model-list requests on background threads.
pub struct ModelsFetchManager {
    progress_tx: mpsc::Sender<ModelsProgress>,
    progress_rx: mpsc::Receiver<ModelsProgress>,
}

impl ModelsFetchManager {
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            progress_tx,
            progress_rx,
        }
    }

    /// Issue one model-list request for `brand`.
    ///
    /// Spawns a background thread immediately; the outcome arrives via
    /// `poll_progress`. Prior in-flight requests are left running.
    pub fn start_fetch(&self, server_url: &str, brand: &str) {
        let tx = self.progress_tx.clone();
        let server_url = server_url.to_string();
        let brand = brand.to_string();

        std::thread::spawn(move || {
            run_fetch(server_url, brand, tx);
        });

        tracing::info!("Model fetch started");
    }

    /// Poll for outcome messages without blocking.
    ///
    /// Returns at most `MAX_FETCH_MESSAGES_PER_FRAME` messages; any
    /// surplus stays queued for the next frame.
    pub fn poll_progress(&self) -> Vec<ModelsProgress> {
        let mut messages = Vec::new();
        while messages.len() < MAX_FETCH_MESSAGES_PER_FRAME {
            match self.progress_rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(_) => break,
            }
        }
        messages
    }
}

impl Default for ModelsFetchManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background request body: fetch, log the outcome, send it to the UI.
fn run_fetch(server_url: String, brand: String, tx: mpsc::Sender<ModelsProgress>) {
    match fetch_models(&server_url, &brand) {
        Ok(models) => {
            tracing::debug!(brand = %brand, count = models.len(), "Model list fetched");
            // Send error means the receiver dropped (UI closed); exit quietly.
            let _ = tx.send(ModelsProgress::Completed { brand, models });
        }
        Err(e) => {
            tracing::error!(brand = %brand, error = %e, "Error fetching models");
            let _ = tx.send(ModelsProgress::Failed {
                brand,
                error: e.to_string(),
            });
        }
    }
}

/// Fetch and decode the model list for `brand`.
///
/// The brand value is attached as a URL-encoded query parameter by the
/// client library. The body is decoded regardless of HTTP status: the
/// backend answers rejected requests with a JSON body too, and a body
/// without a `models` field is a valid "no models" answer. Only an
/// unreadable or non-JSON body is an error.
pub fn fetch_models(server_url: &str, brand: &str) -> Result<Vec<ModelEntry>, FetchError> {
    let url = format!("{server_url}{MODELS_PATH}");

    // No timeout: a slow server keeps the picker in its loading state
    // rather than surfacing a spurious error.
    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| FetchError::Client { source: e })?;

    let response = client
        .get(&url)
        .query(&[(MODELS_BRAND_PARAM, brand)])
        .send()
        .map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;

    let body = response.text().map_err(|e| FetchError::Body {
        url: url.clone(),
        source: e,
    })?;

    let parsed: ModelListResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidJson { url, source: e })?;

    Ok(parsed.models)
}
