use crate::error::TransportError;
use crate::models::{
    NewUser, Position, PositionsResponse, RegistrationResponse, TokenResponse, User, UsersPage,
};
use crate::outcome::Outcome;
use crate::traits::{Transport, UsersApi};
use crate::types::{ApiRequest, HttpResponse};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Notify;

/// Mock transport replaying scripted responses in order
#[derive(Default)]
pub struct MockTransport {
    pub responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    pub requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: HttpResponse) -> Self {
        self.responses.lock().push_back(Ok(response));
        self
    }

    pub fn with_failure(self, error: TransportError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::other("Mock response not found")))
    }
}

/// Mock API returning scripted outcomes per operation
#[derive(Default)]
pub struct MockUsersApi {
    pub pages: Mutex<VecDeque<Outcome<UsersPage>>>,
    pub positions: Mutex<VecDeque<Outcome<PositionsResponse>>>,
    pub tokens: Mutex<VecDeque<Outcome<TokenResponse>>>,
    pub registrations: Mutex<VecDeque<Outcome<RegistrationResponse>>>,
    pub requested_pages: Mutex<Vec<(u32, u32)>>,
    pub registered: Mutex<Vec<(String, NewUser)>>,
    pub gate: Option<Arc<Notify>>,
}

impl MockUsersApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, outcome: Outcome<UsersPage>) -> Self {
        self.pages.lock().push_back(outcome);
        self
    }

    pub fn with_positions(self, outcome: Outcome<PositionsResponse>) -> Self {
        self.positions.lock().push_back(outcome);
        self
    }

    pub fn with_token(self, outcome: Outcome<TokenResponse>) -> Self {
        self.tokens.lock().push_back(outcome);
        self
    }

    pub fn with_registration(self, outcome: Outcome<RegistrationResponse>) -> Self {
        self.registrations.lock().push_back(outcome);
        self
    }

    /// Hold every `get_users` call until the gate is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.requested_pages.lock().iter().map(|(page, _)| *page).collect()
    }

    fn next<T>(queue: &Mutex<VecDeque<Outcome<T>>>) -> Outcome<T> {
        queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| Outcome::Error(crate::outcome::ApiFailure::unknown()))
    }
}

impl UsersApi for MockUsersApi {
    async fn get_users(&self, page: u32, count: u32) -> Outcome<UsersPage> {
        self.requested_pages.lock().push((page, count));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Self::next(&self.pages)
    }

    async fn get_positions(&self) -> Outcome<PositionsResponse> {
        Self::next(&self.positions)
    }

    async fn get_token(&self) -> Outcome<TokenResponse> {
        Self::next(&self.tokens)
    }

    async fn register_user(&self, token: &str, user: &NewUser) -> Outcome<RegistrationResponse> {
        self.registered.lock().push((token.to_string(), user.clone()));
        Self::next(&self.registrations)
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;

    pub fn create_mock_response(status: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        HttpResponse {
            status,
            headers,
            body: body.to_string(),
            url: "https://example.com/api/v1/test".to_string(),
        }
    }

    pub fn create_mock_user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            phone: "+380501234567".to_string(),
            position: "Lawyer".to_string(),
            position_id: 2,
            registration_timestamp: 1_700_000_000 + id,
            photo: format!("https://example.com/images/users/{id}.jpeg"),
        }
    }

    pub fn create_mock_page(page: u32, total_pages: u32, ids: &[i64]) -> UsersPage {
        UsersPage {
            success: true,
            total_pages,
            total_users: total_pages * 10,
            page,
            count: ids.len() as u32,
            users: ids.iter().copied().map(create_mock_user).collect(),
            links: Default::default(),
        }
    }

    pub fn create_mock_positions() -> PositionsResponse {
        PositionsResponse {
            success: true,
            positions: vec![
                Position {
                    id: 1,
                    name: "Lawyer".to_string(),
                },
                Position {
                    id: 2,
                    name: "Content manager".to_string(),
                },
            ],
        }
    }
}
