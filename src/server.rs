use std::path::Path as FsPath;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::dashboard::{Action, Fixtures, Tab};
use crate::ui::{self, DashboardContext, app::HTMX_ASSET};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>, fixtures: Fixtures) -> anyhow::Result<()> {
    let state = AppState {
        dashboard: DashboardContext {
            fixtures: Arc::new(fixtures),
            student: config.student.clone(),
        },
        config: Arc::clone(&config),
    };

    if !FsPath::new(&config.server.static_dir).join(HTMX_ASSET).is_file() {
        warn!(
            name: "static.htmx.missing",
            static_dir = %config.server.static_dir,
            asset = HTMX_ASSET,
            "htmx is not vendored; tab switching will not work (see README.md)"
        );
    }

    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the router for the given state.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.server.request_timeout();

    let router = Router::new()
        // HTML pages
        .route("/", get(index_handler))
        .route("/tabs/{tab}", get(tab_handler))
        // Inert action hooks
        .route("/actions/{action}", post(action_handler))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", ServeDir::new(&state.config.server.static_dir))
        .layer(TraceLayer::new_for_http());

    match timeout {
        Some(duration) => with_request_timeout(router, duration),
        None => router,
    }
    .with_state(state)
}

/// Answer `408 Request Timeout` when a request outlives `duration`.
fn with_request_timeout<S>(router: Router<S>, duration: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(duration, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Full page, Overview tab active.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_page(&state.dashboard))
}

/// GET /tabs/:tab - Tab root fragment for HTMX swaps.
async fn tab_handler(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let tab: Tab = tab
        .parse()
        .map_err(|e: crate::dashboard::UnknownTab| (StatusCode::NOT_FOUND, e.to_string()))?;

    info!(name: "dashboard.tab.selected", tab = %tab, "Tab selected");

    Ok(Html(ui::render_tab(&state.dashboard, tab)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Action Hooks
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for action hooks.
#[derive(Debug, Deserialize)]
struct ActionQuery {
    /// Record the action refers to, if any.
    #[serde(default)]
    id: Option<String>,
}

/// POST /actions/:action - Accept and ignore a dashboard action.
async fn action_handler(
    Path(action): Path<String>,
    Query(query): Query<ActionQuery>,
) -> Result<StatusCode, (StatusCode, String)> {
    let action: Action = action
        .parse()
        .map_err(|e: crate::dashboard::UnknownAction| (StatusCode::NOT_FOUND, e.to_string()))?;

    info!(
        name: "dashboard.action.ignored",
        action = %action,
        id = ?query.id,
        "Dashboard action has no effect"
    );

    Ok(StatusCode::NO_CONTENT)
}

async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use tower::ServiceExt;

    use super::*;

    fn state(config: AppConfig) -> AppState {
        AppState {
            dashboard: DashboardContext {
                fixtures: Arc::new(Fixtures::embedded().unwrap()),
                student: config.student.clone(),
            },
            config: Arc::new(config),
        }
    }

    #[tokio::test]
    async fn test_unknown_tab_is_not_found() {
        let app = router(state(AppConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tabs/settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out() {
        let routes: Router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let app = with_request_timeout(routes, Duration::from_secs(1));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_request_within_timeout() {
        let routes: Router = Router::new().route(
            "/fast",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                "done"
            }),
        );
        let app = with_request_timeout(routes, Duration::from_secs(1));

        let response = app
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_zero_timeout_does_not_reject_requests() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 0;
        let app = router(state(config));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let mut config = AppConfig::default();
        config.server.timeout_disabled = true;
        let app = router(state(config));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
