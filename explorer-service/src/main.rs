//! 数据库对象浏览服务
//!
//! 提供以下功能：
//! - 已保存连接的增删查与连接测试
//! - 按方言浏览表、视图、函数、约束等数据库对象
//! - DDL、属性、语句模板生成
//! - 即席查询与命令历史

mod handlers;
mod history;
mod routes;
mod service;
mod sessions;
mod state;
mod store;

use axum::{middleware, routing::get, Json, Router};
use common::config::AppConfig;
use common::middleware::request_id::request_id_middleware;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "explorer-service";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "数据库浏览服务 API",
        version = "0.1.0",
        description = "多方言数据库对象浏览、DDL 与命令历史"
    ),
    paths(
        handlers::list_connections,
        handlers::create_connection,
        handlers::get_connection,
        handlers::delete_connection,
        handlers::test_connection,
        handlers::connection_info,
        handlers::list_templates,
        handlers::get_template,
        handlers::list_objects,
        handlers::list_object_columns,
        handlers::get_ddl,
        handlers::get_properties,
        handlers::get_definition,
        handlers::get_fields,
        handlers::generate_statement,
        handlers::query_data,
        handlers::table_records,
        handlers::error_position,
        handlers::update_delete_rules,
        handlers::add_query_history,
        handlers::add_console_history,
        handlers::list_history,
        handlers::clear_history,
        handlers::health_check,
    ),
    components(schemas(
        common::models::ConnectionItem,
        common::models::CreateConnectionRequest,
        common::models::DbType,
        common::models::ErrorPosition,
        common::models::QueryDataRequest,
        common::models::TableRecordsRequest,
        common::models::ErrorPositionRequest,
        common::models::RulesRequest,
        common::models::HistoryFilter,
        common::models::HistoryListRequest,
        common::models::HistoryPage,
        common::models::NewQueryHistory,
        common::models::NewConsoleHistory,
        dialect::DataTable,
        dialect::Template,
        dialect::TemplateType,
        dialect::Features,
        dialect::Commands,
        service::ConnectionInfo,
        service::ConnectionTestResult,
        handlers::HealthResponse,
    )),
    tags(
        (name = "connections", description = "连接管理端点"),
        (name = "explorer", description = "对象浏览端点"),
        (name = "query", description = "查询端点"),
        (name = "history", description = "命令历史端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME);

    // 创建应用状态（SQLite 元数据库）
    let state = AppState::new(config.clone())
        .await
        .map_err(|e| anyhow::anyhow!("初始化元数据库失败 (META_DATABASE_URL): {}", e))?;

    let app = create_router(state);

    // 启动服务
    let addr = format!("{}:{}", config.host, config.port);
    info!(service = SERVICE_NAME, address = %addr, "启动服务");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Load .env file from the working directory (best-effort, no error if missing).
fn load_dotenv() {
    let Ok(content) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            // 环境变量已设置时不覆盖
            if std::env::var(key).is_err() {
                std::env::set_var(key, value.trim().trim_matches('"'));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use common::middleware::REQUEST_ID_HEADER;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn app() -> Router {
        let store = store::tests::memory_store().await;
        create_router(AppState::with_store(AppConfig::default(), store))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// SQLite target with one table and two rows; returns the new connection id.
    async fn sqlite_target(app: &Router) -> (TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.db");
        let pool = sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", path.display()))
            .await
            .unwrap();
        for stmt in [
            "create table orders (id integer primary key, customer text not null)",
            "insert into orders (customer) values ('alice'), ('bob')",
        ] {
            sqlx::query(stmt).execute(&pool).await.unwrap();
        }
        pool.close().await;

        let (status, body) = send(
            app,
            "POST",
            "/api/connections",
            Some(json!({
                "name": "local",
                "db_type": "sqlite",
                "database": path.to_str().unwrap(),
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["data"]["id"].as_str().unwrap().to_string();
        (dir, id)
    }

    #[tokio::test]
    async fn test_health_carries_request_id() {
        let app = app().await;
        let response = app
            .clone()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(&REQUEST_ID_HEADER));

        let (_, body) = send(&app, "GET", "/api/health", None).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let app = app().await;
        let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/history/list"].is_object());
    }

    #[tokio::test]
    async fn test_connection_lifecycle() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/connections",
            Some(json!({ "name": "", "db_type": "postgres" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (_dir, id) = sqlite_target(&app).await;
        let (_, list) = send(&app, "GET", "/api/connections", None).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 1);
        assert!(list["data"][0].get("password").is_none());

        let (_, test) = send(&app, "GET", &format!("/api/connections/{}/test", id), None).await;
        assert_eq!(test["data"]["success"], true);
        assert_eq!(test["data"]["message"], dialect::CONNECTION_OK);

        let (status, _) = send(&app, "DELETE", &format!("/api/connections/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, "GET", &format!("/api/connections/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "CONNECTION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_browse_sqlite_objects() {
        let app = app().await;
        let (_dir, id) = sqlite_target(&app).await;

        let (status, tables) =
            send(&app, "GET", &format!("/api/connections/{}/objects/tables", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(tables["data"]["rows"][0][0], "orders");

        let (status, _) =
            send(&app, "GET", &format!("/api/connections/{}/objects/bogus", id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, select) = send(
            &app,
            "GET",
            &format!("/api/connections/{}/generate/select?table=orders", id),
            None,
        )
        .await;
        assert!(select["data"].as_str().unwrap().contains("customer"));

        let (status, _) = send(
            &app,
            "GET",
            &format!("/api/connections/{}/fields?object=orders&kind=table", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, info) = send(&app, "GET", &format!("/api/connections/{}/info", id), None).await;
        assert_eq!(info["data"]["dialect"], "sqlite");
        assert!(info["data"]["version"].as_str().unwrap().starts_with("SQLite"));
    }

    #[tokio::test]
    async fn test_query_is_recorded_in_history() {
        let app = app().await;
        let (_dir, id) = sqlite_target(&app).await;

        let (status, result) = send(
            &app,
            "POST",
            &format!("/api/connections/{}/query", id),
            Some(json!({ "sql": "select customer from orders order by id", "limit": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["data"]["rows"].as_array().unwrap().len(), 1);

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/connections/{}/query", id),
            Some(json!({ "sql": "select * from missing_table" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, page) = send(
            &app,
            "POST",
            "/api/history/list",
            Some(json!({ "connection_id": id, "command_type": "Query" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["data"]["pages"], 1);
        let items = page["data"]["command_list"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        let statuses: Vec<&str> = items.iter().map(|i| i["status"].as_str().unwrap()).collect();
        assert!(statuses.contains(&"success"));
        assert!(statuses.contains(&"error"));

        let (status, body) = send(
            &app,
            "POST",
            "/api/history/clear",
            Some(json!({ "connection_id": id, "command_type": "Query" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_history_unknown_connection() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/history/list",
            Some(json!({ "connection_id": "nope", "command_type": "Console" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"], "Connection not found: nope");
    }
}
