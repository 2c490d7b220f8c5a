use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use dashboard_core::{
    page_layout, render_output, year_selector_enabled, Component, Selection, PAGE_TITLE,
};
use dataset_client::DatasetConfig;
use sales_core::SalesTable;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

const PORT_ENV: &str = "PORT";
const ASSETS_DIR_ENV: &str = "DASHBOARD_ASSETS_DIR";

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared handler state; the table never changes after startup.
#[derive(Clone)]
struct ServerState {
    table: Arc<SalesTable>,
    dataset: DatasetInfo,
}

#[derive(Debug, Clone)]
struct DatasetInfo {
    url: String,
    fetched_at: DateTime<Utc>,
}

/// Raw control values sent by the shell on every interaction.
#[derive(Debug, Deserialize)]
struct UpdateRequest {
    statistics: Option<String>,
    year: Option<i32>,
}

#[derive(Debug, Serialize)]
struct UpdateResponse {
    year_disabled: bool,
    children: Vec<Component>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = DatasetConfig::default();
    info!(url = %config.url, "fetching dataset");
    let table = dataset_client::fetch_sales_table(&config).await?;
    info!(rows = table.len(), "dataset loaded");

    let state = ServerState {
        table: Arc::new(table),
        dataset: DatasetInfo {
            url: config.url,
            fetched_at: Utc::now(),
        },
    };
    let app = router(state);

    let port = env::var(PORT_ENV)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("dashboard listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/layout", get(layout_handler))
        .route("/api/update", post(update_handler))
        .route("/api/dataset/meta", get(dataset_meta_handler))
        .fallback_service(ServeDir::new(assets_dir()))
        .with_state(state)
}

fn assets_dir() -> String {
    env::var(ASSETS_DIR_ENV)
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string())
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn layout_handler() -> Json<Component> {
    Json(page_layout())
}

async fn update_handler(
    State(state): State<ServerState>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let selection = Selection::from_raw(request.statistics.as_deref(), request.year);
    debug!(?selection, "recomputing output region");
    Json(UpdateResponse {
        year_disabled: !year_selector_enabled(selection.statistics),
        children: render_output(&state.table, &selection),
    })
}

async fn dataset_meta_handler(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({
        "title": PAGE_TITLE,
        "rows": state.table.len(),
        "years": state.table.year_span().map(|(first, last)| json!([first, last])),
        "source": state.dataset.url,
        "fetchedAt": state.dataset.fetched_at.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::SalesRecord;

    fn rec(
        year: i32,
        month: &str,
        vehicle_type: &str,
        sales: f64,
        ad_spend: f64,
        recession: bool,
        unemployment: f64,
    ) -> SalesRecord {
        SalesRecord {
            year,
            month: month.to_string(),
            vehicle_type: vehicle_type.to_string(),
            automobile_sales: sales,
            advertising_expenditure: ad_spend,
            recession,
            unemployment_rate: unemployment,
        }
    }

    fn state() -> ServerState {
        ServerState {
            table: Arc::new(SalesTable::new(vec![
                rec(2020, "Jan", "Car", 100.0, 50.0, false, 5.0),
                rec(2020, "Feb", "Truck", 200.0, 30.0, false, 5.5),
                rec(1982, "Mar", "Car", 80.0, 20.0, true, 8.0),
            ])),
            dataset: DatasetInfo {
                url: "http://localhost/sales.csv".to_string(),
                fetched_at: Utc::now(),
            },
        }
    }

    #[tokio::test]
    async fn update_recession_report_ignores_year() {
        let shared = state();
        let without_year = update_handler(
            State(shared.clone()),
            Json(UpdateRequest {
                statistics: Some("Recession Period Statistics".to_string()),
                year: None,
            }),
        )
        .await;
        let with_year = update_handler(
            State(shared),
            Json(UpdateRequest {
                statistics: Some("Recession Period Statistics".to_string()),
                year: Some(2020),
            }),
        )
        .await;
        assert!(without_year.0.year_disabled);
        assert_eq!(without_year.0.children.len(), 2);
        assert_eq!(without_year.0.children, with_year.0.children);
    }

    #[tokio::test]
    async fn update_yearly_needs_a_year() {
        let response = update_handler(
            State(state()),
            Json(UpdateRequest {
                statistics: Some("Yearly Statistics".to_string()),
                year: None,
            }),
        )
        .await;
        assert!(!response.0.year_disabled);
        assert!(response.0.children.is_empty());
    }

    #[tokio::test]
    async fn update_unknown_statistics_is_blank() {
        let response = update_handler(
            State(state()),
            Json(UpdateRequest {
                statistics: Some("Select Statistics".to_string()),
                year: Some(2020),
            }),
        )
        .await;
        assert!(response.0.year_disabled);
        assert!(response.0.children.is_empty());
    }

    #[tokio::test]
    async fn update_yearly_with_year_fills_both_groups() {
        let response = update_handler(
            State(state()),
            Json(UpdateRequest {
                statistics: Some("Yearly Statistics".to_string()),
                year: Some(2020),
            }),
        )
        .await;
        assert!(!response.0.year_disabled);
        assert_eq!(response.0.children.len(), 2);
    }

    #[tokio::test]
    async fn meta_reports_the_dataset_shape() {
        let response = dataset_meta_handler(State(state())).await;
        let value = response.0;
        assert_eq!(value["title"], PAGE_TITLE);
        assert_eq!(value["rows"], 3);
        assert_eq!(value["years"], serde_json::json!([1982, 2020]));
        assert_eq!(value["source"], "http://localhost/sales.csv");
        assert!(value["fetchedAt"].is_string());
    }

    #[tokio::test]
    async fn layout_is_served_as_a_container() {
        let response = layout_handler().await;
        assert!(matches!(response.0, Component::Container { .. }));
    }

    #[test]
    fn shell_page_references_the_assets() {
        assert!(INDEX_HTML.contains("app.js"));
        assert!(INDEX_HTML.contains("plotly"));
    }
}
