//! Authenticated HTTP client for the practice-management GraphQL API.

use crate::records::{PatientAppointments, PatientOverview, PatientSummary};
use crate::{queries, Appointment, HealthieError, HealthieResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UsersData {
    users: Vec<PatientSummary>,
}

#[derive(Debug, Deserialize)]
struct UserData<T> {
    user: Option<T>,
}

/// Client for the practice-management GraphQL endpoint.
///
/// Construct once at startup and clone freely; the underlying connection
/// pool is shared between clones.
#[derive(Debug, Clone)]
pub struct HealthieClient {
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl HealthieClient {
    /// Creates a client for the given API base URL and API key.
    ///
    /// The key is sent as an `Authorization: Basic <key>` header on every
    /// request, which is how the upstream API authenticates server-side
    /// integrations.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not parse, the key is empty or
    /// not a valid header value, or the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: &str) -> HealthieResult<Self> {
        let endpoint = reqwest::Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| HealthieError::InvalidBaseUrl(e.to_string()))?;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(HealthieError::EmptyApiKey);
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Basic {api_key}"))
            .map_err(|_| HealthieError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(HealthieError::ClientBuild)?;

        Ok(Self { endpoint, client })
    }

    /// Lists all active patients.
    pub async fn list_patients(&self) -> HealthieResult<Vec<PatientSummary>> {
        let data: UsersData = self.execute(queries::LIST_PATIENTS, None).await?;
        tracing::debug!(count = data.users.len(), "listed active patients");
        Ok(data.users)
    }

    /// Fetches demographics and the raw quick-notes export for one patient.
    pub async fn patient_overview(&self, patient_id: &str) -> HealthieResult<PatientOverview> {
        let data: UserData<PatientOverview> = self
            .execute(
                queries::PATIENT_OVERVIEW,
                Some(serde_json::json!({ "userId": patient_id })),
            )
            .await?;
        data.user
            .ok_or_else(|| HealthieError::PatientNotFound(patient_id.to_owned()))
    }

    /// Fetches just the raw quick-notes export for one patient.
    ///
    /// Returns `Ok(None)` when the patient exists but has no intake data.
    pub async fn quick_notes(&self, patient_id: &str) -> HealthieResult<Option<String>> {
        let data: UserData<PatientOverview> = self
            .execute(
                queries::PATIENT_QUICK_NOTES,
                Some(serde_json::json!({ "userId": patient_id })),
            )
            .await?;
        let user = data
            .user
            .ok_or_else(|| HealthieError::PatientNotFound(patient_id.to_owned()))?;
        Ok(user.quick_notes)
    }

    /// Fetches a patient's appointment history.
    pub async fn appointments(&self, patient_id: &str) -> HealthieResult<Vec<Appointment>> {
        let data: UserData<PatientAppointments> = self
            .execute(
                queries::PATIENT_APPOINTMENTS,
                Some(serde_json::json!({ "userId": patient_id })),
            )
            .await?;
        let user = data
            .user
            .ok_or_else(|| HealthieError::PatientNotFound(patient_id.to_owned()))?;
        Ok(user.appointments)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> HealthieResult<T> {
        let request = GraphqlRequest { query, variables };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(HealthieError::Http)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "practice-management API request failed");
            return Err(HealthieError::Status(status));
        }

        let body: GraphqlResponse<T> = response.json().await.map_err(HealthieError::Decode)?;

        if !body.errors.is_empty() {
            let messages = body
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(HealthieError::Graphql(messages));
        }

        body.data.ok_or(HealthieError::MissingData)
    }
}
