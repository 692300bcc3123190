//! HTTP document store client

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{EntityId, OwnerId};
use crate::domain::ports::{Document, DocumentStore};
use crate::error::StoreError;

/// Implementation of DocumentStore over the store's REST API
pub struct HttpDocumentStore {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn collection_url(&self, owner: &OwnerId, collection: &str) -> String {
        format!(
            "{}/v1/owners/{}/{}",
            self.base_url,
            encode(owner.as_str()),
            encode(collection)
        )
    }

    fn document_url(&self, owner: &OwnerId, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(owner, collection), encode(id))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        if self.token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.token)
        }
    }

    /// Map non-success statuses shared by every endpoint
    async fn error_for(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                StoreError::PermissionDenied(message)
            }
            StatusCode::TOO_MANY_REQUESTS => StoreError::RateLimited,
            _ => StoreError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn read_document(response: reqwest::Response) -> Result<Document, StoreError> {
        response
            .json()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))
    }
}

#[derive(Deserialize)]
struct DocumentListResponse {
    documents: Vec<Document>,
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn add_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<Option<Document>, StoreError> {
        let resp = self
            .authorized(self.http.post(self.document_url(owner, collection, id)))
            .json(doc)
            .send()
            .await?;

        match resp.status() {
            StatusCode::CONFLICT => Ok(None),
            s if s.is_success() => Self::read_document(resp).await.map(Some),
            _ => Err(Self::error_for(resp).await),
        }
    }

    async fn get_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let resp = self
            .authorized(self.http.get(self.document_url(owner, collection, id)))
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Self::read_document(resp).await.map(Some),
            _ => Err(Self::error_for(resp).await),
        }
    }

    async fn get_all(
        &self,
        owner: &OwnerId,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let resp = self
            .authorized(self.http.get(self.collection_url(owner, collection)))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }

        let list: DocumentListResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;
        Ok(list.documents)
    }

    async fn update_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
        doc: &Document,
    ) -> Result<bool, StoreError> {
        let resp = self
            .authorized(self.http.put(self.document_url(owner, collection, id)))
            .json(doc)
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            _ => Err(Self::error_for(resp).await),
        }
    }

    async fn delete_document(
        &self,
        owner: &OwnerId,
        collection: &str,
        id: &str,
    ) -> Result<bool, StoreError> {
        let resp = self
            .authorized(self.http.delete(self.document_url(owner, collection, id)))
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            _ => Err(Self::error_for(resp).await),
        }
    }
}
