//! Shared fixtures for the integration tests

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use users_client::ClientConfig;
use wiremock::MockServer;

/// API root served by a mock server
pub fn api_root(server: &MockServer) -> String {
    format!("{}/api/v1/", server.uri())
}

/// Client configuration pointing at a mock server
pub fn config_for(server: &MockServer, page_size: u32) -> ClientConfig {
    ClientConfig::builder()
        .base_url(api_root(server))
        .timeout(5)
        .page_size(page_size)
        .build()
        .expect("mock server config should validate")
}

pub fn user_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": format!("user{id}@example.com"),
        "phone": "+380501234567",
        "position": "Lawyer",
        "position_id": 1,
        "registration_timestamp": 1_700_000_000 + id,
        "photo": format!("https://example.com/images/users/{id}.jpeg")
    })
}

/// Body of a `GET users` page holding the given ids
pub fn users_page_json(page: u32, total_pages: u32, ids: &[i64]) -> Value {
    json!({
        "success": true,
        "page": page,
        "total_pages": total_pages,
        "total_users": total_pages * 2,
        "count": ids.len(),
        "links": {
            "next_url": if page < total_pages { Value::from(format!("users?page={}", page + 1)) } else { Value::Null },
            "prev_url": Value::Null
        },
        "users": ids.iter().copied().map(user_json).collect::<Vec<_>>()
    })
}

pub fn positions_json() -> Value {
    json!({
        "success": true,
        "positions": [
            { "id": 1, "name": "Lawyer" },
            { "id": 2, "name": "Content manager" },
            { "id": 3, "name": "Security" }
        ]
    })
}

/// Write a small stand-in photo and return its path
pub fn write_photo(dir: &Path, file_name: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, b"fake-jpeg-bytes")?;
    Ok(path)
}
