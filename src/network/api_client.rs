use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::constants::CSRF_HEADER_NAME;
use crate::error::{Error, Result};
use crate::reorder::OrderSubmission;

/// Everything needed to send one reorder submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRequest {
    pub endpoint: String,
    pub csrf_token: String,
    pub body: OrderSubmission,
}

/// Seam between the reorder controller and the network.  The browser build
/// uses [`FetchTransport`]; tests substitute a recording mock.
#[async_trait(?Send)]
pub trait ReorderTransport {
    async fn send(&self, request: ReorderRequest) -> Result<()>;
}

/// `window.fetch` based transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ReorderTransport for FetchTransport {
    async fn send(&self, request: ReorderRequest) -> Result<()> {
        let body = request.body.to_json()?;
        post_json(&request.endpoint, &body, &request.csrf_token).await
    }
}

/// POST a JSON body to a same-origin endpoint.
///
/// Any 2xx counts as success and the response body is ignored.  A non-2xx
/// answer becomes [`Error::Status`]; a rejected fetch (offline, aborted)
/// becomes [`Error::Network`].
pub async fn post_json(url: &str, body: &str, csrf_token: &str) -> Result<()> {
    use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_credentials(RequestCredentials::SameOrigin);

    // ----------------------------------------------------------------
    // Headers
    // ----------------------------------------------------------------
    let headers = Headers::new()?;
    headers.append("Content-Type", "application/json")?;
    headers.append(CSRF_HEADER_NAME, csrf_token)?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(Error::network)?;
    let resp: Response = resp_value.dyn_into()?;

    status_result(resp.status(), resp.status_text())
}

/// Any 2xx is success; everything else carries the status back to the caller.
pub fn status_result(status: u16, status_text: String) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Status { status, status_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_2xx_is_success() {
        for status in [200, 201, 204, 299] {
            assert!(status_result(status, String::new()).is_ok(), "{status}");
        }
    }

    #[test]
    fn other_statuses_surface_as_status_errors() {
        for status in [199, 301, 403, 500] {
            match status_result(status, "nope".into()) {
                Err(Error::Status { status: s, status_text }) => {
                    assert_eq!(s, status);
                    assert_eq!(status_text, "nope");
                }
                other => panic!("unexpected {other:?} for {status}"),
            }
        }
    }
}
