#![allow(dead_code)]

use async_trait::async_trait;
use larder::remote::{
    Endpoints, HttpRequest, HttpResponse, RemoteClient, RemoteResult, Transport,
};
use larder::tea::{Model, Program};
use reqwest::Method;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE_URL: &str = "http://store.test";
pub const COLLECTION: &str = "ingredients";

/// Mock transport that answers with queued responses per method and records
/// every request it sees
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<Method, VecDeque<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response for the next request with this method
    pub fn respond(&self, method: Method, response: HttpResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    fn default_response(method: &Method) -> HttpResponse {
        if *method == Method::POST {
            HttpResponse::ok(r#"{"name":"gen-default"}"#)
        } else {
            HttpResponse::ok("null")
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, request: HttpRequest) -> RemoteResult<HttpResponse> {
        let method = request.method.clone();
        self.requests.lock().unwrap().push(request);

        let queued = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&method)
            .and_then(|queue| queue.pop_front());
        Ok(queued.unwrap_or_else(|| Self::default_response(&method)))
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> RemoteClient {
    RemoteClient::new(Endpoints::new(BASE_URL, COLLECTION).unwrap(), transport)
}

/// Program whose session is already past the login screen
pub fn logged_in_program(transport: Arc<dyn Transport>, debounce: Duration) -> Program {
    let mut model = Model::new();
    model.session.login();
    Program::with_model(model, client_with(transport), debounce)
}

/// Value of `equalTo` in a listing URL, if any
pub fn equal_to(request: &HttpRequest) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "equalTo")
        .map(|(_, value)| value.into_owned())
}
