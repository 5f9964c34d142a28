//! Bulk-import collaborator: trait seam plus the HTTP implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use prospect_model::{ImportSummary, MappedProspect};

use crate::error::{ImportError, Result};

/// Submission options passed through to the upstream endpoint unchanged.
///
/// Deduplication and idempotency under `add_only_if_new` /
/// `not_in_other_campaign` are entirely owned by the upstream service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOptions {
    /// Target prospect list.
    pub list_id: i64,
    /// Campaign to attach imported prospects to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    /// Skip prospects the platform already knows.
    pub add_only_if_new: bool,
    /// Skip prospects that are already in another campaign.
    pub not_in_other_campaign: bool,
}

impl ImportOptions {
    /// Options targeting a list with all flags off.
    #[must_use]
    pub fn for_list(list_id: i64) -> Self {
        Self {
            list_id,
            campaign_id: None,
            add_only_if_new: false,
            not_in_other_campaign: false,
        }
    }
}

/// The one external capability the import core depends on, invoked once per
/// batch. Implementations own transport, auth, and timeout policy.
#[async_trait]
pub trait BulkImporter: Send + Sync {
    /// Submits one batch of prospects and returns the upstream counters.
    async fn bulk_import(
        &self,
        prospects: &[MappedProspect],
        options: &ImportOptions,
    ) -> Result<ImportSummary>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkImportRequest<'a> {
    prospects: &'a [MappedProspect],
    #[serde(flatten)]
    options: &'a ImportOptions,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    title: Option<String>,
}

/// HTTP client for the platform's bulk-import endpoint.
///
/// Authenticates with an `X-API-Key` header and posts JSON to
/// `{base_url}/prospects/import`.
#[derive(Debug, Clone)]
pub struct ManyreachClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ManyreachClient {
    /// Creates a client for the given API base URL (no trailing slash
    /// required) and key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl BulkImporter for ManyreachClient {
    async fn bulk_import(
        &self,
        prospects: &[MappedProspect],
        options: &ImportOptions,
    ) -> Result<ImportSummary> {
        let url = format!("{}/prospects/import", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("X-API-Key", &self.api_key)
            .json(&BulkImportRequest { prospects, options })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message.or(body.title))
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ImportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let summary = response.json::<ImportSummary>().await?;
        tracing::debug!(
            batch_size = prospects.len(),
            inserted = summary.prospects_inserted,
            updated = summary.prospects_updated,
            duplicates = summary.duplicates_in_batch,
            "batch accepted"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_model::ProspectField;

    #[test]
    fn request_body_matches_upstream_wire_format() {
        let mut prospect = MappedProspect::new("jane@acme.com");
        prospect.set(ProspectField::FirstName, Some("Jane".to_string()));
        let options = ImportOptions {
            list_id: 7,
            campaign_id: Some(12),
            add_only_if_new: true,
            not_in_other_campaign: false,
        };
        let body = BulkImportRequest {
            prospects: std::slice::from_ref(&prospect),
            options: &options,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["listId"], 7);
        assert_eq!(json["campaignId"], 12);
        assert_eq!(json["addOnlyIfNew"], true);
        assert_eq!(json["notInOtherCampaign"], false);
        assert_eq!(json["prospects"][0]["email"], "jane@acme.com");
        assert_eq!(json["prospects"][0]["firstName"], "Jane");
    }

    #[test]
    fn absent_campaign_id_is_omitted() {
        let options = ImportOptions::for_list(7);
        let json = serde_json::to_value(&options).unwrap();
        assert!(json.get("campaignId").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ManyreachClient::new("https://api.example.com/v2/", "key");
        assert_eq!(client.base_url, "https://api.example.com/v2");
    }
}
