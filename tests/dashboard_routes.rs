use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use edutracker::AppState;
use edutracker::config::AppConfig;
use edutracker::dashboard::{Action, Fixtures, Tab};
use edutracker::server::router;
use edutracker::ui::DashboardContext;

fn server() -> TestServer {
    let config = AppConfig::default();
    let state = AppState {
        dashboard: DashboardContext {
            fixtures: Arc::new(Fixtures::embedded().unwrap()),
            student: config.student.clone(),
        },
        config: Arc::new(config),
    };
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_index_renders_overview() {
    let server = server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("EduTracker"));
    assert!(html.contains("Welcome back, John!"));
    assert!(html.contains(r#"id="dashboard-tabs""#));
    assert!(html.contains(r#"data-panel="overview""#));
    assert!(html.contains("/static/vendor/htmx-2.0.8.min.js"));
}

#[tokio::test]
async fn test_every_tab_fragment_renders_its_panel() {
    let server = server();

    for tab in Tab::ALL {
        let response = server.get(&tab.href()).await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(&format!(r#"data-active-tab="{tab}""#)));
        assert!(html.contains(&format!(r#"data-panel="{tab}""#)));
        assert_eq!(html.matches("data-panel=").count(), 1);
        // Fragments carry no document chrome
        assert!(!html.contains("Welcome back"));
    }
}

#[tokio::test]
async fn test_unknown_tab_is_not_found() {
    let server = server();

    let response = server.get("/tabs/settings").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actions_are_accepted_and_ignored() {
    let server = server();

    for action in Action::ALL {
        let response = server.post(&action.href(Some("1"))).await;
        response.assert_status(StatusCode::NO_CONTENT);
    }

    // The id is optional
    server
        .post(&Action::Search.href(None))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Nothing changed
    let html = server.get("/tabs/communications").await.text();
    assert_eq!(html.matches("data-communication=").count(), 3);
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    let server = server();

    let response = server.post("/actions/delete?id=1").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("ok");
}
