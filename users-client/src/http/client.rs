use crate::config::ApiSettings;
use crate::error::{ClientError, Result, TransportError};
use crate::http::request_builder::{normalize_base_url, RequestBuilderImpl};
use crate::http::response_converter::convert_response;
use crate::traits::Transport;
use crate::types::{ApiRequest, HttpResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Transport backed by a shared reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
}

impl ReqwestTransport {
    /// Create a new transport from API settings
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let base_url = normalize_base_url(&settings.base_url)?;

        let mut default_headers = HeaderMap::new();
        for (key, value) in &settings.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| ClientError::invalid_config(format!("Invalid header name: {}", key)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                ClientError::invalid_config(format!("Invalid value for header {}", key))
            })?;
            default_headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .default_headers(default_headers);
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), base_url);

        Ok(Self {
            client,
            request_builder,
        })
    }

    pub fn base_url(&self) -> &url::Url {
        self.request_builder.base_url()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<HttpResponse, TransportError> {
        let request = self.request_builder.build_request(request)?;
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        convert_response(response).await
    }
}
