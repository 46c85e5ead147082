// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use salon_reports::ReportDocument;
use salon_reports_api::{
    ApiError, AvailableReportsResponse, Caller, CallerContext, EngineConfig, InMemoryRecordSource,
    ReportCapability, ReportEngine, ReportSummary, RunReportRequest, list_available_reports,
    report_capabilities,
};
use salon_reports_domain::{AggregationConfig, DEFAULT_TIMEZONE, ReportTimezone};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Salon Reports Server - HTTP server for the salon reporting engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON record fixture. If not provided, serves an empty record set.
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Most location fetches in flight per report run
    #[arg(long, default_value_t = 4)]
    max_concurrency: usize,

    /// Seconds allowed for a single location fetch
    #[arg(long, default_value_t = 30)]
    fetch_timeout_secs: u64,

    /// Timezone used when a request does not name one
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Working hours per open day, used for utilization
    #[arg(long, default_value_t = 8)]
    working_hours_per_day: u32,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The report engine.
    engine: ReportEngine,
    /// Cancelled on shutdown; every run gets a child token.
    shutdown: CancellationToken,
}

/// API request for running a report.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RunReportApiRequest {
    /// The authenticated caller.
    caller: CallerContext,
    /// The report to run.
    request: RunReportRequest,
}

/// API response for listing the reports available to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailableReportsApiResponse {
    /// The caller's role.
    role: String,
    /// Reports the caller may run, in catalog order.
    reports: Vec<ReportSummary>,
    /// Allowed or denied for every catalog entry.
    capabilities: Vec<ReportCapability>,
}

/// API response for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Status for a run the client gave up on.
fn client_closed_request() -> StatusCode {
    StatusCode::from_u16(499).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::DataUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Cancelled => client_closed_request(),
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST `/reports/available` endpoint.
///
/// Lists the reports the caller may run, plus allowed/denied for the whole
/// catalog.
async fn handle_available_reports(
    Json(context): Json<CallerContext>,
) -> Result<Json<AvailableReportsApiResponse>, HttpError> {
    let caller: Caller = Caller::from_context(context)?;
    info!(role = caller.role.as_str(), "Handling available_reports request");

    let response: AvailableReportsResponse = list_available_reports(&caller);
    Ok(Json(AvailableReportsApiResponse {
        role: response.role,
        reports: response.reports,
        capabilities: report_capabilities(&caller),
    }))
}

/// Handler for POST `/reports/run` endpoint.
///
/// Runs a report and returns the assembled document.
async fn handle_run_report(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RunReportApiRequest>,
) -> Result<Json<ReportDocument>, HttpError> {
    let caller: Caller = Caller::from_context(req.caller)?;
    info!(
        report = %req.request.report_id,
        role = caller.role.as_str(),
        "Handling run_report request"
    );

    let cancel: CancellationToken = app_state.shutdown.child_token();
    let document: ReportDocument = app_state
        .engine
        .run(&caller, &req.request, &cancel)
        .await?;
    Ok(Json(document))
}

/// Handler for POST `/reports/shift-close.csv` endpoint.
///
/// Runs the shift close report and returns it as CSV.
async fn handle_shift_close_csv(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RunReportApiRequest>,
) -> Result<Response, HttpError> {
    let caller: Caller = Caller::from_context(req.caller)?;
    info!(role = caller.role.as_str(), "Handling shift_close_csv request");

    let cancel: CancellationToken = app_state.shutdown.child_token();
    let csv: String = app_state
        .engine
        .run_shift_close_csv(&caller, &req.request, &cancel)
        .await?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/reports/available", post(handle_available_reports))
        .route("/reports/run", post(handle_run_report))
        .route("/reports/shift-close.csv", post(handle_shift_close_csv))
        .with_state(app_state)
}

/// Waits for Ctrl+C or SIGTERM, then cancels in-flight runs.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
    shutdown.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Salon Reports Server");

    let source: InMemoryRecordSource = if let Some(path) = &args.fixtures {
        info!("Loading record fixture from: {}", path.display());
        InMemoryRecordSource::from_path(path)?
    } else {
        info!("No fixture given, serving an empty record set");
        InMemoryRecordSource::default()
    };

    let config: EngineConfig = EngineConfig {
        max_concurrency: args.max_concurrency,
        fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
        default_timezone: ReportTimezone::parse(&args.timezone)?,
        aggregation: AggregationConfig {
            working_hours_per_day: args.working_hours_per_day,
            ..AggregationConfig::default()
        },
    };

    let shutdown: CancellationToken = CancellationToken::new();
    let app_state: AppState = AppState {
        engine: ReportEngine::new(Arc::new(source), config),
        shutdown: shutdown.clone(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}
