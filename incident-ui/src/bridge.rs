use async_trait::async_trait;
use incident_core::config::Config;
use incident_core::{ApiRequest, ApiResponse, ClientError, SessionStorage, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    format!("{context}: {detail}")
}

fn transport_error(context: &str) -> impl FnOnce(JsValue) -> ClientError + '_ {
    move |err| ClientError::Transport(js_error(context, err))
}

/// `window.fetch` against the configured API base.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    config: Config,
}

impl FetchTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Transport("window not available".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(&body.to_string()));
        }

        let url = self.config.url(&request.path);
        let req = Request::new_with_str_and_init(&url, &init)
            .map_err(transport_error("invalid request"))?;
        let headers = req.headers();
        if request.body.is_some() {
            headers
                .set("Content-Type", "application/json")
                .map_err(transport_error("failed to set content type"))?;
        }
        if let Some(token) = &request.bearer {
            headers
                .set("Authorization", &format!("Bearer {token}"))
                .map_err(transport_error("failed to set authorization"))?;
        }

        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport_error("fetch rejected"))?;
        let response: Response = value
            .dyn_into()
            .map_err(transport_error("fetch returned a non-response"))?;
        let text = JsFuture::from(response.text().map_err(transport_error("unreadable body"))?)
            .await
            .map_err(transport_error("unreadable body"))?;

        Ok(ApiResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// Browser `localStorage`. Reads degrade to "absent" when storage is unavailable
/// (private mode, disabled cookies); writes report the failure.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; session will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, String> {
        self.storage
            .as_ref()
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem failed", e))
    }

    fn remove(&mut self, key: &str) -> Result<(), String> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| js_error("removeItem failed", e))
    }
}
