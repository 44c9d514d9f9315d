use crate::error::TransportError;
use crate::types::{ApiRequest, FormPart, RequestBody};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Request};
use url::Url;

/// Turns [`ApiRequest`]s into reqwest requests against a base URL
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    base_url: Url,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::other(format!("Invalid request path '{}': {}", path, e)))
    }

    pub fn build_request(&self, request: ApiRequest) -> Result<Request, TransportError> {
        let url = self.resolve(&request.path)?;
        let mut builder = self.client.request(request.method, url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        if let RequestBody::Multipart(parts) = request.body {
            builder = builder.multipart(build_form(parts)?);
        }

        builder.build().map_err(Into::into)
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let file = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

/// Ensure the base URL ends with `/` so relative paths are appended, not substituted
pub(crate) fn normalize_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
