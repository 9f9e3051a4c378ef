use backon::{ExponentialBuilder, Retryable};
use opentelemetry::{Context, global};
use reqwest::{Client, Method, RequestBuilder, Response, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use shared::{
    config::ApiConfig, domain::responses::ApiEnvelope, errors::ClientError,
    utils::HeaderInjector,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Thin JSON client for the upstream commerce API.
///
/// Replies are expected in a `{success, data, message}` envelope; an
/// unsuccessful envelope or a non-2xx status becomes a [`ClientError`] carrying
/// the server's message verbatim. Reads are retried on transient failures,
/// mutations never are.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
    image_url: String,
    max_retries: usize,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_url: config.image_url.clone(),
            max_retries: config.max_retries,
        })
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, cx: &Context, method: Method, path: &str) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(cx, &mut HeaderInjector(&mut headers))
        });

        self.http.request(method, self.url(path)).headers(headers)
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        cx: &Context,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self
            .request(cx, Method::GET, path)
            .query(query)
            .send()
            .await?;
        require_data(decode_envelope(response).await?)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        cx: &Context,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        if self.max_retries == 0 {
            return self.get_once(cx, path, query).await;
        }

        (|| self.get_once(cx, path, query))
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_delay(Duration::from_secs(2))
                    .with_max_times(self.max_retries)
                    .with_jitter(),
            )
            .when(ClientError::should_retry)
            .notify(|e, dur| {
                warn!(
                    "GET {path} failed, retrying after {:.2}s: {e}",
                    dur.as_secs_f64()
                )
            })
            .await
    }

    pub async fn post<B, T>(&self, cx: &Context, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(cx, Method::POST, path)
            .json(body)
            .send()
            .await?;
        require_data(decode_envelope(response).await?)
    }

    pub async fn put<B, T>(
        &self,
        cx: &Context,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(cx, Method::PUT, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        require_data(decode_envelope(response).await?)
    }

    /// Deletes ignore whatever `data` the API sends back.
    pub async fn delete(&self, cx: &Context, path: &str) -> Result<(), ClientError> {
        let response = self.request(cx, Method::DELETE, path).send().await?;
        decode_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}

async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        debug!(status = status.as_u16(), %message, "upstream returned an error status");
        return Err(ClientError::Http {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiEnvelope<T> =
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

    if !envelope.success {
        return Err(ClientError::Api(
            envelope
                .message
                .unwrap_or_else(|| "Request was not successful".to_string()),
        ));
    }

    Ok(envelope.data)
}

fn require_data<T>(data: Option<T>) -> Result<T, ClientError> {
    data.ok_or_else(|| ClientError::Decode("response envelope has no data".to_string()))
}
