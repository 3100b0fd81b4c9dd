//! Authenticated client for the recruiting-platform API.
//!
//! [`PlatformClient::login`] exchanges credentials for a bearer token once
//! per process; every other method sends that token. Tokens are never
//! cached across runs or refreshed. Each operator command opens exactly one
//! session.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::PlatformError;
use super::types::{
    Attachment, AttachmentEnvelope, Candidate, DecodeResponse, Integration, OpenJobRole,
    PartialUpdate, ResumeListEnvelope, ResumePage, ResultEnvelope, SessionEnvelope, SessionRequest,
};

#[derive(Debug)]
pub struct PlatformClient {
    http: Client,
    base_url: String,
    token: String,
}

impl PlatformClient {
    /// Open a session against `base_url` and return a client carrying the
    /// resulting bearer token.
    pub async fn login(
        base_url: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, PlatformError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");

        let response = http
            .put(format!("{base_url}/sessions"))
            .json(&SessionRequest { email, password })
            .send()
            .await?;

        let envelope: SessionEnvelope = parse_json(response, "session token").await?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token: envelope.result.fields.token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// One page of the resume listing.
    pub async fn list_resumes(&self, limit: u64, skip: u64) -> Result<ResumePage, PlatformError> {
        let response = self
            .http
            .get(self.url("/resumes"))
            .query(&[("limit", limit), ("skip", skip)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let envelope: ResumeListEnvelope = parse_json(response, "resume listing").await?;
        Ok(ResumePage {
            resumes: envelope.result,
            has_more: envelope.list.has_more,
        })
    }

    /// Ask the platform to migrate one resume into its own storage.
    ///
    /// The raw body is returned whatever the status; an `errors` key in it
    /// marks failure. This mirrors the migrate endpoint's habit of
    /// reporting problems in a 200 body.
    pub async fn migrate_resume(&self, resume_id: &str) -> Result<Value, PlatformError> {
        let response = self
            .http
            .put(self.url(&format!("/resumes/{resume_id}/migrate")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        parse_value(response).await
    }

    /// Partial-update a resume's `external_link`. The body is returned raw
    /// so callers can check for an `errors` key.
    pub async fn update_resume_link(
        &self,
        resume_id: &str,
        link: &str,
    ) -> Result<Value, PlatformError> {
        let response = self
            .http
            .put(self.url(&format!("/resumes/{resume_id}")))
            .bearer_auth(&self.token)
            .json(&PartialUpdate::set("external_link", link))
            .send()
            .await?;
        parse_value(response).await
    }

    /// Fetch a candidate. A non-success status means "not found" to the
    /// operator tools, not a hard failure.
    pub async fn get_candidate(
        &self,
        candidate_id: &str,
    ) -> Result<Option<Candidate>, PlatformError> {
        let response = self
            .http
            .get(self.url(&format!("/candidates/{candidate_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }
        let envelope: ResultEnvelope<Candidate> = parse_json(response, "candidate").await?;
        Ok(Some(envelope.result))
    }

    pub async fn get_open_job_role(&self, role_id: &str) -> Result<OpenJobRole, PlatformError> {
        let response = self
            .http
            .get(self.url(&format!("/open_job_roles/{role_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let envelope: ResultEnvelope<OpenJobRole> = parse_json(response, "open job role").await?;
        Ok(envelope.result)
    }

    /// Integrations visible for an organization.
    pub async fn list_integrations(
        &self,
        organization_id: &str,
    ) -> Result<Vec<Integration>, PlatformError> {
        let response = self
            .http
            .get(self.url("/integrations"))
            .query(&[("organization_id[id]", organization_id)])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let envelope: ResultEnvelope<Vec<Integration>> =
            parse_json(response, "integration listing").await?;
        Ok(envelope.result)
    }

    /// Attachments of an ATS application, possibly empty.
    pub async fn list_ats_attachments(
        &self,
        integration_id: &str,
        ats_application_id: &str,
    ) -> Result<Vec<Attachment>, PlatformError> {
        let response = self
            .http
            .get(self.url(&format!(
                "/integrations/{integration_id}/ats_applications/{ats_application_id}/attachments"
            )))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let envelope: AttachmentEnvelope = parse_json(response, "attachment listing").await?;
        Ok(envelope.result.map(|r| r.fields).unwrap_or_default())
    }

    /// Translate an external id into the platform's internal id.
    pub async fn decode_id(&self, external_id: &str) -> Result<String, PlatformError> {
        let response = self
            .http
            .get(self.url(&format!("/decode_id/{external_id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let decoded: DecodeResponse = parse_json(response, "decoded id").await?;
        Ok(decoded.internal_id)
    }

    /// Partial-update a candidate profile's full name.
    pub async fn update_profile_name(
        &self,
        profile_id: &str,
        full_name: &str,
    ) -> Result<(), PlatformError> {
        let response = self
            .http
            .put(self.url(&format!("/candidate_profiles/{profile_id}")))
            .bearer_auth(&self.token)
            .json(&PartialUpdate::set("full_name", full_name))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Read a response body, failing on error statuses and on unexpected shape.
async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, PlatformError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(PlatformError::Api {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|e| PlatformError::Shape(format!("{context}: {e}")))
}

/// Read a response body as raw JSON without status discrimination.
async fn parse_value(response: reqwest::Response) -> Result<Value, PlatformError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| PlatformError::Shape(format!("response body: {e}")))
}
