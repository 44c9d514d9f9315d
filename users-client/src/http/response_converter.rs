use crate::error::TransportError;
use crate::types::HttpResponse;
use reqwest::Response;
use std::collections::HashMap;

/// Convert reqwest Response to our HttpResponse
pub async fn convert_response(response: Response) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let url = response.url().to_string();

    // Extract headers
    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.insert(name.to_string(), value_str.to_string());
        }
    }

    // Extract body
    let body = response.text().await?;

    Ok(HttpResponse {
        status,
        headers,
        body,
        url,
    })
}
