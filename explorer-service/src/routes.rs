//! 浏览服务路由模块

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

/// 创建全部 API 路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/connections", get(list_connections).post(create_connection))
        .route("/api/connections/{id}", get(get_connection).delete(delete_connection))
        .route("/api/connections/{id}/test", get(test_connection))
        .route("/api/connections/{id}/info", get(connection_info))
        .route("/api/connections/{id}/templates", get(list_templates))
        .route("/api/connections/{id}/templates/{key}", get(get_template))
        .route("/api/connections/{id}/objects/{kind}", get(list_objects))
        .route("/api/connections/{id}/objects/{kind}/columns", get(list_object_columns))
        .route("/api/connections/{id}/ddl", get(get_ddl))
        .route("/api/connections/{id}/properties", get(get_properties))
        .route("/api/connections/{id}/definition", get(get_definition))
        .route("/api/connections/{id}/fields", get(get_fields))
        .route("/api/connections/{id}/generate/{statement}", get(generate_statement))
        .route("/api/connections/{id}/query", post(query_data))
        .route("/api/connections/{id}/records", post(table_records))
        .route("/api/connections/{id}/error-position", post(error_position))
        .route("/api/connections/{id}/rules", post(update_delete_rules))
        .route("/api/history/query", post(add_query_history))
        .route("/api/history/console", post(add_console_history))
        .route("/api/history/list", post(list_history))
        .route("/api/history/clear", post(clear_history))
        .route("/api/health", get(health_check))
}
