//! HTTP implementation of the bill store.
//!
//! Thin reqwest client over the Billed store API: multipart POST for the
//! attachment, PATCH for the record update, GET for the listing. Every
//! response goes through the same status-check-then-decode path.

use std::time::Duration;

use async_trait::async_trait;
use billed_core::models::{AttachmentResponse, Bill, SelectedReceipt, UpdateAck};
use reqwest::multipart;
use serde::de::DeserializeOwned;

use crate::traits::{BillStore, StoreError, StoreResult};

/// HTTP client for the Billed store API.
#[derive(Clone, Debug)]
pub struct HttpBillStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBillStore {
    pub fn new(base_url: &str, timeout: Duration) -> StoreResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> StoreResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn create_attachment(
        &self,
        receipt: &SelectedReceipt,
        email: &str,
    ) -> StoreResult<AttachmentResponse> {
        let part = multipart::Part::bytes(receipt.content.clone())
            .file_name(receipt.name.clone())
            .mime_str(&receipt.media_type)
            .map_err(|err| StoreError::InvalidPayload(err.to_string()))?;

        // The form sets its own multipart content type; no JSON header may
        // be imposed on this request.
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", email.to_string());

        let response = self
            .client
            .post(self.build_url("/bills"))
            .multipart(form)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn update_bill(&self, selector: &str, data: String) -> StoreResult<UpdateAck> {
        let response = self
            .client
            .patch(self.build_url(&format!("/bills/{}", selector)))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(data)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn list_bills(&self, email: &str) -> StoreResult<Vec<Bill>> {
        let response = self
            .client
            .get(self.build_url("/bills"))
            .query(&[("email", email)])
            .send()
            .await?;

        self.decode(response).await
    }
}
