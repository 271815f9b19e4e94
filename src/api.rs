//! Typed HTTP client for the portal's REST backend. One method per backend
//! operation; every call reduces to a typed reply or a `PortalError` carrying
//! the server's message classified by status.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::{PortalError, PortalResult};
use crate::session::Role;

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

// --- Wire types ---------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "userType", default)]
    pub user_type: Option<String>,
    /// Police logins return the badge id; the other roles do not.
    #[serde(default)]
    pub badge_id: Option<String>,
    /// Civilian logins return the civilian and account ids.
    #[serde(default)]
    pub civilian_id: Option<i64>,
    #[serde(default)]
    pub account_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    /// Badge id of the reporting officer, when a police session files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub description: String,
    pub location: String,
    pub address: Option<String>,
    pub incident_date: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplaintReply {
    #[serde(default)]
    pub message: String,
    pub incident_id: i64,
    pub case_id: i64,
    #[serde(default)]
    pub lawyer_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseSummary {
    pub case_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lawyer_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseBundle {
    #[serde(rename = "assignedCases", default)]
    pub assigned: Vec<CaseSummary>,
    #[serde(rename = "resolvedCases", default)]
    pub resolved: Vec<CaseSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceRecord {
    pub evidence_id: i64,
    pub complaint_id: i64,
    #[serde(default)]
    pub police_id: Option<i64>,
    #[serde(default)]
    pub lawyer_id: Option<String>,
    #[serde(default)]
    pub submitter_type: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceReply {
    #[serde(default)]
    pub message: String,
    pub evidence: EvidenceRecord,
}

/// Who is attaching evidence to a case. The backend only accepts police and
/// lawyer submitters; civilian sessions are refused before any upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceSubmitter {
    Police { badge_id: String },
    Lawyer { lawyer_id: String },
}

impl EvidenceSubmitter {
    pub fn kind(&self) -> &'static str {
        match self {
            EvidenceSubmitter::Police { .. } => "police",
            EvidenceSubmitter::Lawyer { .. } => "lawyer",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            EvidenceSubmitter::Police { badge_id } => badge_id,
            EvidenceSubmitter::Lawyer { lawyer_id } => lawyer_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerInfoDraft {
    pub bar_id: String,
    pub branch_name: String,
    pub state: String,
    pub court_location: Option<String>,
    pub judiciary: Option<String>,
    pub judiciary_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceInfoDraft {
    pub state: String,
    pub pin_code: String,
    pub station_number: String,
    pub station_location: String,
    pub police_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AckReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupportReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub support_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionRow {
    #[serde(rename = "Section", default)]
    pub section: String,
    #[serde(rename = "Offense", default)]
    pub offense: String,
    #[serde(rename = "Punishment", default)]
    pub punishment: String,
}

// --- Client -------------------------------------------------------------

impl ApiClient {
    pub fn new(base: &str, timeout: Duration) -> PortalResult<Self> {
        let base = Url::parse(base).map_err(|e| PortalError::UserInput {
            code: "bad_api_url".into(),
            message: format!("invalid API base URL: {}", e),
        })?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { base, http })
    }

    pub fn base(&self) -> &Url { &self.base }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> PortalResult<T> {
        let url = self.join(path)?;
        debug!(%url, "api.post");
        let resp = self.http.post(url).json(body).send().await?;
        decode(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> PortalResult<T> {
        let url = self.join(path)?;
        debug!(%url, "api.get");
        let resp = self.http.get(url).send().await?;
        decode(resp).await
    }

    fn join(&self, path: &str) -> PortalResult<Url> {
        self.base.join(path).map_err(|e| PortalError::Internal {
            code: "bad_path".into(),
            message: format!("invalid request path {}: {}", path, e),
        })
    }

    // --- Auth ---

    pub async fn login(&self, role: Role, id_or_username: &str, password: &str) -> PortalResult<LoginReply> {
        let body = serde_json::json!({ "idOrUsername": id_or_username, "password": password });
        self.post_json(&format!("/api/{}/login", role.slug()), &body).await
    }

    pub async fn signup_civilian(&self, username: &str, phoneno: &str, password: &str) -> PortalResult<MessageReply> {
        let body = serde_json::json!({ "username": username, "phoneno": phoneno, "password": password });
        self.post_json("/api/civilian/signup", &body).await
    }

    /// Lawyer and police signups share a shape: a role-specific id plus
    /// contact details.
    pub async fn signup_with_id(
        &self,
        role: Role,
        id: &str,
        email: &str,
        phoneno: &str,
        password: &str,
    ) -> PortalResult<MessageReply> {
        let body = serde_json::json!({ "id": id, "email": email, "phoneno": phoneno, "password": password });
        self.post_json(&format!("/api/{}/signup", role.slug()), &body).await
    }

    // --- Complaints and cases ---

    pub async fn register_complaint(&self, draft: &ComplaintDraft) -> PortalResult<ComplaintReply> {
        self.post_json("/api/police/complaint", draft).await
    }

    pub async fn police_cases(&self, badge_id: &str) -> PortalResult<CaseBundle> {
        self.get_json(&format!("/api/police/cases/{}", urlencoding::encode(badge_id))).await
    }

    pub async fn lawyer_cases(&self, lawyer_id: &str) -> PortalResult<CaseBundle> {
        self.get_json(&format!("/api/lawyer/cases/{}", urlencoding::encode(lawyer_id))).await
    }

    // --- Evidence ---

    pub async fn submit_evidence(
        &self,
        case_id: i64,
        submitter: &EvidenceSubmitter,
        file_path: &Path,
    ) -> PortalResult<EvidenceReply> {
        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "evidence".to_string());
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .text("complaintId", case_id.to_string())
            .text("submitterId", submitter.id().to_string())
            .text("submitterType", submitter.kind().to_string())
            .part("evidenceFile", part);
        let url = self.join("/api/evidence")?;
        debug!(%url, case_id, "api.evidence_upload");
        let resp = self.http.post(url).multipart(form).send().await?;
        decode(resp).await
    }

    pub async fn evidence_for_case(&self, case_id: i64) -> PortalResult<Vec<EvidenceRecord>> {
        self.get_json(&format!("/api/evidence/case/{}", case_id)).await
    }

    // --- Directory registrations ---

    pub async fn register_lawyer_info(&self, draft: &LawyerInfoDraft) -> PortalResult<AckReply> {
        self.post_json("/api/lawyerInfo", draft).await
    }

    pub async fn register_police_info(&self, draft: &PoliceInfoDraft) -> PortalResult<AckReply> {
        self.post_json("/api/policeInfo", draft).await
    }

    // --- Support and reference search ---

    pub async fn submit_support(&self, question: &str, account_id: Option<i64>) -> PortalResult<SupportReply> {
        let body = serde_json::json!({ "question": question, "account_id": account_id });
        self.post_json("/api/support", &body).await
    }

    /// Free-text search over the legal-code reference table. An empty query
    /// returns the whole table.
    pub async fn search_sections(&self, query: &str) -> PortalResult<Vec<SectionRow>> {
        let body = serde_json::json!({ "query": query });
        self.post_json("/nlp/search", &body).await
    }

    pub async fn health(&self) -> PortalResult<MessageReply> {
        self.get_json("/nlp/test").await
    }
}

/// Decode a response: success bodies parse into `T`; failure bodies surface
/// the backend's `message` classified by status.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> PortalResult<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let message = match resp.json::<serde_json::Value>().await {
        Ok(v) => v
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| v.to_string()),
        Err(_) => format!("HTTP {}", status),
    };
    Err(PortalError::from_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_draft_uses_frontend_field_names() {
        let draft = ComplaintDraft {
            badge_id: Some("42".into()),
            name: Some("A".into()),
            email: None,
            phone: None,
            description: "stolen bicycle".into(),
            location: "Pune".into(),
            address: None,
            incident_date: "2026-08-01".into(),
            timestamp: "2026-08-01T10:00:00Z".into(),
        };
        let v = serde_json::to_value(&draft).unwrap();
        assert_eq!(v["badgeId"], "42");
        assert_eq!(v["incidentDate"], "2026-08-01");
        assert!(v.get("badge_id").is_none());
    }

    #[test]
    fn login_reply_tolerates_role_specific_fields() {
        let police: LoginReply = serde_json::from_str(
            r#"{"message":"Police login successful","userType":"Police","badge_id":"77"}"#,
        )
        .unwrap();
        assert_eq!(police.badge_id.as_deref(), Some("77"));
        assert_eq!(police.civilian_id, None);

        let civ: LoginReply = serde_json::from_str(
            r#"{"message":"Login successful","userType":"Civilian","civilian_id":5,"account_id":9}"#,
        )
        .unwrap();
        assert_eq!(civ.civilian_id, Some(5));
        assert_eq!(civ.badge_id, None);
    }

    #[test]
    fn case_bundle_defaults_missing_lists() {
        let b: CaseBundle = serde_json::from_str(r#"{"assignedCases":[]}"#).unwrap();
        assert!(b.assigned.is_empty());
        assert!(b.resolved.is_empty());
    }

    #[test]
    fn evidence_submitter_wire_fields() {
        let s = EvidenceSubmitter::Lawyer { lawyer_id: "BAR-9".into() };
        assert_eq!(s.kind(), "lawyer");
        assert_eq!(s.id(), "BAR-9");
    }
}
