//! URL layout of the remote collection

use crate::remote::error::{RemoteError, RemoteResult};
use url::Url;

/// Builds the REST URLs for one collection under a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
    collection: String,
}

impl Endpoints {
    pub fn new(base_url: &str, collection: &str) -> RemoteResult<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(RemoteError::invalid_url(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        if collection.is_empty() {
            return Err(RemoteError::invalid_url("collection name is empty"));
        }

        Ok(Self {
            base,
            collection: collection.to_string(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// `GET` target: the whole collection, optionally filtered by exact title
    pub fn list_url(&self, title_filter: Option<&str>) -> RemoteResult<Url> {
        let mut url = self.with_segments(&[&format!("{}.json", self.collection)])?;
        if let Some(title) = title_filter.filter(|title| !title.is_empty()) {
            url.query_pairs_mut()
                .append_pair("orderBy", "\"title\"")
                .append_pair("equalTo", &format!("\"{}\"", title));
        }
        Ok(url)
    }

    /// `POST` target for new ingredients
    pub fn create_url(&self) -> RemoteResult<Url> {
        self.with_segments(&[&format!("{}.json", self.collection)])
    }

    /// `DELETE` target for one ingredient
    pub fn item_url(&self, id: &str) -> RemoteResult<Url> {
        self.with_segments(&[&self.collection, &format!("{}.json", id)])
    }

    fn with_segments(&self, segments: &[&str]) -> RemoteResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::invalid_url(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
