//! In-process stand-in for the remote store
//!
//! Serves the same REST paths as the real store out of a map held in memory.
//! Keys are random push-style strings. Used by `--offline` and by tests.

use crate::ingredient::{Ingredient, NewIngredient};
use crate::remote::error::RemoteResult;
use crate::remote::transport::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::sync::{Mutex, MutexGuard};

const KEY_LENGTH: usize = 19;

#[derive(Debug, Default)]
struct MemoryState {
    records: Map<String, Value>,
    forced_status: Option<u16>,
    requests: Vec<HttpRequest>,
}

/// Transport that answers from an in-memory collection
#[derive(Debug)]
pub struct MemoryTransport {
    collection: String,
    state: Mutex<MemoryState>,
}

impl MemoryTransport {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Start with existing records, keyed by their ids
    pub fn with_ingredients(collection: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        let transport = Self::new(collection);
        {
            let mut state = transport.lock();
            for ingredient in ingredients {
                state.records.insert(
                    ingredient.id,
                    json!({ "title": ingredient.title, "amount": ingredient.amount }),
                );
            }
        }
        transport
    }

    /// Answer every following request with this status, or resume normal
    /// service with `None`
    pub fn force_status(&self, status: Option<u16>) {
        self.lock().forced_status = status;
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Current contents in insertion order
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let state = self.lock();
        state
            .records
            .iter()
            .filter_map(|(key, value)| {
                let record = serde_json::from_value::<NewIngredient>(value.clone()).ok()?;
                Some(Ingredient::from_new(key.clone(), record))
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned map is still a usable map for a test double.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let mut state = self.lock();
        state.requests.push(request.clone());

        if let Some(status) = state.forced_status {
            return error_response(status, "Forced failure");
        }

        let segments: Vec<&str> = request
            .url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        let listing = format!("{}.json", self.collection);

        match segments.as_slice() {
            [.., last] if *last == listing => {
                if request.method == Method::GET {
                    list(&state.records, title_filter(request))
                } else if request.method == Method::POST {
                    create(&mut state.records, request.body.as_deref())
                } else {
                    error_response(405, "Method not allowed")
                }
            }
            [.., parent, item] if *parent == self.collection && item.ends_with(".json") => {
                let id = item.trim_end_matches(".json");
                if request.method == Method::DELETE {
                    state.records.shift_remove(id);
                    HttpResponse::ok("null")
                } else if request.method == Method::GET {
                    HttpResponse::ok(
                        state.records.get(id).cloned().unwrap_or(Value::Null).to_string(),
                    )
                } else {
                    error_response(405, "Method not allowed")
                }
            }
            _ => error_response(404, "Not found"),
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    fn name(&self) -> &str {
        "memory"
    }

    async fn send(&self, request: HttpRequest) -> RemoteResult<HttpResponse> {
        Ok(self.handle(&request))
    }
}

/// `equalTo` value when the request orders by title
fn title_filter(request: &HttpRequest) -> Option<String> {
    let mut order_by = None;
    let mut equal_to = None;
    for (key, value) in request.url.query_pairs() {
        match key.as_ref() {
            "orderBy" => order_by = Some(value.trim_matches('"').to_string()),
            "equalTo" => equal_to = Some(value.trim_matches('"').to_string()),
            _ => {}
        }
    }

    match order_by.as_deref() {
        Some("title") => equal_to,
        _ => None,
    }
}

fn list(records: &Map<String, Value>, title: Option<String>) -> HttpResponse {
    let Some(title) = title else {
        if records.is_empty() {
            return HttpResponse::ok("null");
        }
        return HttpResponse::ok(Value::Object(records.clone()).to_string());
    };

    let matching: Map<String, Value> = records
        .iter()
        .filter(|(_, value)| value.get("title").and_then(Value::as_str) == Some(title.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    HttpResponse::ok(Value::Object(matching).to_string())
}

fn create(records: &mut Map<String, Value>, body: Option<&str>) -> HttpResponse {
    let parsed = body.and_then(|body| serde_json::from_str::<Value>(body).ok());
    let Some(value @ Value::Object(_)) = parsed else {
        return error_response(400, "Invalid data; couldn't parse JSON object");
    };

    let key = loop {
        let candidate = generate_key();
        if !records.contains_key(&candidate) {
            break candidate;
        }
    };
    records.insert(key.clone(), value);
    HttpResponse::ok(json!({ "name": key }).to_string())
}

fn generate_key() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect();
    format!("-{}", suffix)
}

fn error_response(status: u16, message: &str) -> HttpResponse {
    HttpResponse::new(status, json!({ "error": message }).to_string())
}
