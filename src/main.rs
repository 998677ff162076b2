use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use chartview_core::{CoreConfig, DEFAULT_HEALTHIE_API_URL, NotesService};
use healthie::{HealthieClient, HealthieError};
use quicknotes::{FormattedNotes, ParsedNotes};

/// Application state shared across REST API handlers
///
/// Holds the practice-management API client and the notes service the
/// handlers parse and format with.
#[derive(Clone)]
struct AppState {
    healthie: HealthieClient,
    notes: NotesService,
}

#[derive(Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

#[derive(Serialize, ToSchema)]
struct PatientRow {
    id: String,
    name: String,
    email: Option<String>,
    dob: Option<String>,
    gender: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct ListPatientsRes {
    patients: Vec<PatientRow>,
}

#[derive(Serialize, ToSchema)]
struct PatientNotesRes {
    patient_id: String,
    /// Raw parsed fields: null, string or string-array values.
    #[schema(value_type = Object)]
    parsed: ParsedNotes,
    /// Parsed fields after curated label substitution.
    #[schema(value_type = Object)]
    formatted: FormattedNotes,
    /// One resolved display string per field; explicit absences omitted.
    #[schema(value_type = Object)]
    display: BTreeMap<String, String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_patients, patient_notes),
    components(schemas(HealthRes, ListPatientsRes, PatientRow, PatientNotesRes))
)]
struct ApiDoc;

/// Main entry point for the chartview application
///
/// Starts the REST server that backs the clinical-data viewer: patient
/// listing and parsed/formatted quick notes, fetched on demand from the
/// practice-management API.
///
/// # Environment Variables
/// - `CHARTVIEW_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `HEALTHIE_API_URL`: practice-management GraphQL endpoint
/// - `HEALTHIE_API_KEY`: API key for the practice-management API (required)
/// - `CHARTVIEW_LABELS_FILE`: optional YAML file with label overrides
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chartview=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CHARTVIEW_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let api_url =
        std::env::var("HEALTHIE_API_URL").unwrap_or_else(|_| DEFAULT_HEALTHIE_API_URL.into());
    let api_key = std::env::var("HEALTHIE_API_KEY")
        .map_err(|_| anyhow::anyhow!("HEALTHIE_API_KEY must be set"))?;
    let labels_file = std::env::var("CHARTVIEW_LABELS_FILE").ok().map(Into::into);

    let config = CoreConfig::new(api_url, api_key, labels_file)?;
    let notes = NotesService::new(config.label_table()?);
    let healthie = config.healthie_client()?;

    tracing::info!("++ Starting chartview REST on {}", rest_addr);

    let app = Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients/:id/notes", get(patient_notes))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { healthie, notes });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "chartview is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "List of active patients", body = ListPatientsRes),
        (status = 502, description = "Practice-management API unavailable")
    )
)]
/// List all active patients
///
/// Fetches the active-patient listing from the practice-management API and
/// returns one row per patient with the demographics the viewer shows in
/// its overview column.
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<ListPatientsRes>, (StatusCode, &'static str)> {
    let patients = state.healthie.list_patients().await.map_err(|e| {
        tracing::error!("List patients error: {:?}", e);
        (StatusCode::BAD_GATEWAY, "Upstream API error")
    })?;

    let patients = patients
        .into_iter()
        .map(|p| PatientRow {
            name: p.full_name(),
            id: p.id,
            email: p.email,
            dob: p.dob,
            gender: p.gender,
        })
        .collect();

    Ok(Json(ListPatientsRes { patients }))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/notes",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Parsed and formatted quick notes", body = PatientNotesRes),
        (status = 404, description = "Patient not found"),
        (status = 502, description = "Practice-management API unavailable")
    )
)]
/// Parsed and formatted quick notes for one patient
///
/// Fetches the raw quick-notes export, runs the parsing pipeline and
/// returns the parsed mapping, the label-formatted mapping and the
/// resolved display strings the viewer renders.
async fn patient_notes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientNotesRes>, (StatusCode, &'static str)> {
    let quick_notes = state.healthie.quick_notes(&id).await.map_err(|e| match e {
        HealthieError::PatientNotFound(_) => (StatusCode::NOT_FOUND, "Patient not found"),
        other => {
            tracing::error!("Quick notes fetch error: {:?}", other);
            (StatusCode::BAD_GATEWAY, "Upstream API error")
        }
    })?;

    let parsed = state.notes.parse_quick_notes(quick_notes.as_deref());
    let formatted = state.notes.format_quick_notes(&parsed);
    let display = state.notes.resolve_display(&parsed, &formatted);

    Ok(Json(PatientNotesRes {
        patient_id: id,
        parsed,
        formatted,
        display,
    }))
}
