//! Tipos de dados da API da plataforma de recrutamento.
//!
//! As respostas chegam como envelopes no formato
//! `{"result": ..., "list": {"has_more": ...}, "errors": ...}`, onde cada
//! registro é `{"id": ..., "fields": {...}}`. Apenas os campos que as
//! ferramentas de operação realmente leem são modelados; o restante é
//! ignorado na desserialização.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resume record as returned by `GET /resumes`.
#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub id: String,
    pub fields: ResumeFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeFields {
    #[serde(default)]
    pub candidate_id: String,
    #[serde(default)]
    pub external_link: String,
}

/// One page of the resume listing plus the server's pagination hint.
#[derive(Debug)]
pub struct ResumePage {
    pub resumes: Vec<Resume>,
    pub has_more: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeListEnvelope {
    pub result: Vec<Resume>,
    pub list: ListMeta,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListMeta {
    pub has_more: bool,
}

/// A candidate record. The profile id sits on the record itself; the ATS
/// linkage lives under `fields`.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub candidate_profile_id: String,
    pub fields: CandidateFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateFields {
    #[serde(default)]
    pub open_job_role_id: String,
    #[serde(default)]
    pub ats_candidate_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenJobRole {
    pub fields: OpenJobRoleFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenJobRoleFields {
    #[serde(default)]
    pub organization_id: String,
}

/// An integration record from `GET /integrations`.
#[derive(Debug, Clone, Deserialize)]
pub struct Integration {
    pub id: String,
    pub fields: IntegrationFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationFields {
    /// Integration kind, e.g. `"ats"`. Serialized as `type` on the wire.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub organization_id: String,
}

/// An ATS application attachment. The attachments endpoint returns them as
/// `result.fields`, an array of `{"url": ...}` objects.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AttachmentEnvelope {
    pub result: Option<AttachmentResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AttachmentResult {
    #[serde(default)]
    pub fields: Vec<Attachment>,
}

/// Generic `{"result": ...}` envelope for single-record responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionEnvelope {
    pub result: SessionResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionResult {
    pub fields: SessionFields,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionFields {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DecodeResponse {
    pub internal_id: String,
}

/// Body of a partial-update PUT: the changed fields plus the list of field
/// names that changed.
#[derive(Debug, Serialize)]
pub struct PartialUpdate {
    pub updates: serde_json::Map<String, Value>,
    pub updated: Vec<String>,
}

impl PartialUpdate {
    /// A partial update setting a single string field.
    pub fn set(field: &str, value: &str) -> Self {
        let mut updates = serde_json::Map::new();
        updates.insert(field.to_string(), Value::String(value.to_string()));
        Self {
            updates,
            updated: vec![field.to_string()],
        }
    }
}

/// Whether a migrate/update response body reports an error.
pub fn has_errors(body: &Value) -> bool {
    body.get("errors").is_some()
}
