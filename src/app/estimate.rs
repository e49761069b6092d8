// BilPris - app/estimate.rs
//
// Price-estimate request lifecycle. Same thread-per-request + mpsc
// pattern as the model-list fetch, with its own channel so estimate
// outcomes and model-list outcomes never interleave.
//
// The backend scrapes listing prices on demand, so these requests can
// take several seconds; the UI stays responsive and shows a loading
// state until the outcome message arrives.

use crate::core::model::{EstimateProgress, EstimateRequest, EstimateResponse};
use crate::util::constants::{ESTIMATE_PATH, MAX_FETCH_MESSAGES_PER_FRAME};
use crate::util::error::FetchError;
use std::sync::mpsc;
use std::time::Duration;

/// Manages estimate requests on background threads.
pub struct EstimateFetchManager {
    progress_tx: mpsc::Sender<EstimateProgress>,
    progress_rx: mpsc::Receiver<EstimateProgress>,
}

impl EstimateFetchManager {
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            progress_tx,
            progress_rx,
        }
    }

    /// Issue one estimate request. Spawns a background thread immediately;
    /// the outcome arrives via `poll_progress`.
    pub fn start_fetch(&self, server_url: &str, request: EstimateRequest) {
        let tx = self.progress_tx.clone();
        let server_url = server_url.to_string();

        std::thread::spawn(move || {
            run_fetch(server_url, request, tx);
        });

        tracing::info!("Estimate fetch started");
    }

    /// Poll for outcome messages without blocking.
    pub fn poll_progress(&self) -> Vec<EstimateProgress> {
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

impl Default for EstimateFetchManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Background request body: fetch, log the outcome, send it to the UI.
fn run_fetch(server_url: String, request: EstimateRequest, tx: mpsc::Sender<EstimateProgress>) {
    match fetch_estimate(&server_url, &request) {
        Ok(response) => {
            tracing::debug!(
                brand = %request.brand,
                model = %request.model,
                found = response.price_estimate.is_some(),
                "Estimate fetched"
            );
            let _ = tx.send(EstimateProgress::Completed { response });
        }
        Err(e) => {
            tracing::error!(
                brand = %request.brand,
                model = %request.model,
                error = %e,
                "Error fetching estimate"
            );
            let _ = tx.send(EstimateProgress::Failed {
                error: e.to_string(),
            });
        }
    }
}

/// Fetch and decode a price estimate.
///
/// As with the model list, the body is decoded regardless of HTTP status:
/// the backend answers rejected requests (unknown brand/model, missing
/// parameters) with a JSON body carrying an `error` field, which is
/// surfaced to the caller inside `EstimateResponse`.
pub fn fetch_estimate(
    server_url: &str,
    request: &EstimateRequest,
) -> Result<EstimateResponse, FetchError> {
    let url = format!("{server_url}{ESTIMATE_PATH}");

    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| FetchError::Client { source: e })?;

    let response = client
        .get(&url)
        .query(&request.query_params())
        .send()
        .map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;

    let body = response.text().map_err(|e| FetchError::Body {
        url: url.clone(),
        source: e,
    })?;

    let parsed: EstimateResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidJson { url, source: e })?;

    Ok(parsed)
}
