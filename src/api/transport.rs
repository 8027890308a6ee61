//! `fetch`-based transport for the suggestion client (browser only)

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::SuggestError;
use super::policy::{AttemptOutcome, Backoff, classify_status};
use super::types::{GenerateRequest, GenerateResponse};

/// POST the request, retrying transient failures with exponential backoff
///
/// Client errors abort immediately; network errors and 5xx responses burn
/// one attempt each and wait out the backoff delay before the next try.
pub async fn generate(
    url: &str,
    request: &GenerateRequest,
    backoff: &Backoff,
) -> Result<GenerateResponse, SuggestError> {
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(err) => {
            log::error!("failed to encode suggestion request: {err}");
            return Err(SuggestError::MalformedResponse);
        }
    };

    for attempt in 0..backoff.max_attempts {
        match post_once(url, &body).await {
            Ok(response) => {
                let status = response.status();
                match classify_status(status) {
                    AttemptOutcome::Success => return read_json(response).await,
                    AttemptOutcome::Abort => return Err(SuggestError::ClientError(status)),
                    AttemptOutcome::Retry => {
                        log::warn!("suggestion request got status {status}, will retry");
                    }
                }
            }
            Err(err) => log::warn!("suggestion request failed: {err:?}"),
        }
        sleep_ms(backoff.delay_ms(attempt) as i32).await;
    }

    Err(SuggestError::RetriesExhausted)
}

async fn post_once(url: &str, body: &str) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    response
        .dyn_into::<Response>()
        .map_err(|_| JsValue::from_str("fetch did not yield a Response"))
}

async fn read_json(response: Response) -> Result<GenerateResponse, SuggestError> {
    let text_promise = response.text().map_err(|_| SuggestError::MalformedResponse)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| SuggestError::MalformedResponse)?;
    let text = text.as_string().ok_or(SuggestError::MalformedResponse)?;
    serde_json::from_str(&text).map_err(|_| SuggestError::MalformedResponse)
}

/// Resolve after `ms` milliseconds via `setTimeout`
async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
