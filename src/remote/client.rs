//! Remote client for the ingredient collection

use crate::config::AppConfig;
use crate::ingredient::{created_key, ingredients_from_listing, Ingredient, NewIngredient};
use crate::remote::endpoints::Endpoints;
use crate::remote::error::{RemoteError, RemoteResult};
use crate::remote::memory::MemoryTransport;
use crate::remote::status::RequestSlot;
use crate::remote::transport::{HttpRequest, ReqwestTransport, Transport};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub const ADD_FAILED_MESSAGE: &str = "Something went wrong while adding the ingredient.";
pub const REMOVE_FAILED_MESSAGE: &str = "Something went wrong while removing the ingredient.";
pub const LOAD_FAILED_MESSAGE: &str = "Something went wrong while loading ingredients.";

/// Correlation tag: which user action a request belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTag {
    /// Read the collection, optionally filtered by exact title
    Load { filter: Option<String> },
    /// Create an ingredient from form data
    Add(NewIngredient),
    /// Delete one ingredient
    Remove { id: String },
}

impl RequestTag {
    pub fn load(filter: Option<String>) -> Self {
        RequestTag::Load {
            filter: filter.filter(|text| !text.is_empty()),
        }
    }

    /// Fence slot of this request when issued with sequence number `seq`
    pub fn slot(&self, seq: u64) -> RequestSlot {
        match self {
            RequestTag::Load { .. } => RequestSlot::Load,
            RequestTag::Add(_) => RequestSlot::Add(seq),
            RequestTag::Remove { id } => RequestSlot::Remove(id.clone()),
        }
    }

    /// Message shown when this request fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            RequestTag::Load { .. } => LOAD_FAILED_MESSAGE,
            RequestTag::Add(_) => ADD_FAILED_MESSAGE,
            RequestTag::Remove { .. } => REMOVE_FAILED_MESSAGE,
        }
    }
}

/// A tagged request waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub seq: u64,
    pub tag: RequestTag,
}

impl RemoteRequest {
    pub fn new(seq: u64, tag: RequestTag) -> Self {
        Self { seq, tag }
    }
}

/// A settled request: the tag comes back unchanged next to the parsed body
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    pub seq: u64,
    pub tag: RequestTag,
    pub result: RemoteResult<Value>,
}

/// Client for one remote collection
#[derive(Clone)]
pub struct RemoteClient {
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
}

impl RemoteClient {
    pub fn new(endpoints: Endpoints, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    /// Pick the transport the configuration asks for
    pub fn from_config(config: &AppConfig) -> RemoteResult<Self> {
        let endpoints = Endpoints::new(&config.base_url, &config.collection)?;
        let transport: Arc<dyn Transport> = if config.offline {
            Arc::new(MemoryTransport::new(config.collection.clone()))
        } else {
            Arc::new(ReqwestTransport::new(config.request_timeout())?)
        };
        tracing::info!(
            "Using {} transport for {}",
            transport.name(),
            endpoints.base()
        );
        Ok(Self::new(endpoints, transport))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Send one request and parse the body as JSON. An empty body reads as
    /// `null`; any non-success status is an error.
    pub async fn send_request(
        &self,
        method: Method,
        url: url::Url,
        body: Option<String>,
    ) -> RemoteResult<Value> {
        tracing::debug!("{} {}", method, url);
        let response = self
            .transport
            .send(HttpRequest::new(method.clone(), url.clone(), body))
            .await?;

        if !response.is_success() {
            tracing::warn!("{} {} failed with status {}", method, url, response.status);
            return Err(RemoteError::Status {
                status: response.status,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a tagged request and hand the tag back with the result
    pub async fn dispatch(&self, request: RemoteRequest) -> RequestOutcome {
        let result = match self.prepare(&request.tag) {
            Ok(http) => self.send_request(http.method, http.url, http.body).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!("Request {} ({:?}) failed: {}", request.seq, request.tag.slot(request.seq), e);
        }

        RequestOutcome {
            seq: request.seq,
            tag: request.tag,
            result,
        }
    }

    /// Fetch the collection, optionally filtered by title
    pub async fn list(&self, filter: Option<&str>) -> RemoteResult<Vec<Ingredient>> {
        let body = self
            .send_request(Method::GET, self.endpoints.list_url(filter)?, None)
            .await?;
        Ok(ingredients_from_listing(&body)?)
    }

    /// Store a new ingredient and return it with its generated id
    pub async fn create(&self, new: NewIngredient) -> RemoteResult<Ingredient> {
        let body = serde_json::to_string(&new)?;
        let response = self
            .send_request(Method::POST, self.endpoints.create_url()?, Some(body))
            .await?;
        Ok(Ingredient::from_new(created_key(&response)?, new))
    }

    /// Delete an ingredient by id
    pub async fn remove(&self, id: &str) -> RemoteResult<()> {
        self.send_request(Method::DELETE, self.endpoints.item_url(id)?, None)
            .await?;
        Ok(())
    }

    fn prepare(&self, tag: &RequestTag) -> RemoteResult<HttpRequest> {
        Ok(match tag {
            RequestTag::Load { filter } => {
                HttpRequest::new(Method::GET, self.endpoints.list_url(filter.as_deref())?, None)
            }
            RequestTag::Add(new) => HttpRequest::new(
                Method::POST,
                self.endpoints.create_url()?,
                Some(serde_json::to_string(new)?),
            ),
            RequestTag::Remove { id } => {
                HttpRequest::new(Method::DELETE, self.endpoints.item_url(id)?, None)
            }
        })
    }
}

impl std::fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClient")
            .field("endpoints", &self.endpoints)
            .field("transport", &self.transport.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn memory_client() -> (RemoteClient, Arc<MemoryTransport>) {
        let transport = Arc::new(MemoryTransport::new("ingredients"));
        let endpoints = Endpoints::new("http://memory.local", "ingredients").unwrap();
        (RemoteClient::new(endpoints, transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_typed_round_trip() {
        let (client, _) = memory_client();
        let carrot = client.create(NewIngredient::new("Carrot", "3")).await.unwrap();
        client.create(NewIngredient::new("Onion", "1")).await.unwrap();

        let filtered = client.list(Some("Carrot")).await.unwrap();
        assert_eq!(filtered, vec![carrot.clone()]);

        client.remove(&carrot.id).await.unwrap();
        let remaining = client.list(None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Onion");
    }

    #[tokio::test]
    async fn test_dispatch_returns_tag_unchanged() {
        let (client, _) = memory_client();
        let tag = RequestTag::Add(NewIngredient::new("Carrot", "3"));
        let outcome = client.dispatch(RemoteRequest::new(7, tag.clone())).await;
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.tag, tag);
        assert!(outcome.result.unwrap()["name"].is_string());
    }

    #[tokio::test]
    async fn test_status_failure_is_error() {
        let (client, transport) = memory_client();
        transport.force_status(Some(500));
        let outcome = client
            .dispatch(RemoteRequest::new(1, RequestTag::Remove { id: "k".to_string() }))
            .await;
        assert_eq!(outcome.result, Err(RemoteError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_requests_are_json() {
        let (client, transport) = memory_client();
        client.create(NewIngredient::new("Carrot", "3")).await.unwrap();
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "title": "Carrot", "amount": "3" }));
    }

    #[test]
    fn test_empty_filter_is_unfiltered_load() {
        assert_eq!(
            RequestTag::load(Some(String::new())),
            RequestTag::Load { filter: None }
        );
        assert_eq!(RequestTag::load(None).failure_message(), LOAD_FAILED_MESSAGE);
    }
}
