//! Handler模块

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use common::errors::AppError;
use common::models::{
    ConnectionItem, CreateConnectionRequest, DefinitionQuery, ErrorPosition, ErrorPositionRequest,
    GenerateQuery, HistoryFilter, HistoryListRequest, HistoryPage, NewConsoleHistory,
    NewQueryHistory, ObjectColumnsQuery, ObjectQuery, ObjectRefQuery, QueryDataRequest,
    RulesRequest, TableRecordsRequest,
};
use common::response::ApiResponse;
use dialect::{DataTable, Template};

use crate::history::HistoryService;
use crate::service::{
    ConnectionInfo, ConnectionService, ConnectionServiceTrait, ConnectionTestResult,
    ExplorerService,
};
use crate::state::AppState;

const SERVICE_NAME: &str = "explorer-service";

fn connections(state: &AppState) -> ConnectionService {
    ConnectionService::new(state.store.clone(), state.sessions.clone())
}

fn explorer(state: &AppState) -> ExplorerService {
    ExplorerService::new(state.store.clone(), state.sessions.clone())
}

fn history(state: &AppState) -> HistoryService {
    HistoryService::new(state.store.clone(), state.config.history_page_size)
}

/// 历史列表与清除的错误响应：400 且消息放在 `data` 中
pub struct HistoryRejection(AppError);

impl From<AppError> for HistoryRejection {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HistoryRejection {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "历史请求失败");
        (StatusCode::BAD_REQUEST, Json(json!({ "data": self.0.to_string() }))).into_response()
    }
}

/// 列出所有已保存的数据库连接
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = "connections",
    responses(
        (status = 200, description = "连接列表", body = ApiResponse<Vec<ConnectionItem>>)
    )
)]
pub async fn list_connections(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ConnectionItem>>>, AppError> {
    let data = connections(&state).list().await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 创建新的数据库连接
#[utoipa::path(
    post,
    path = "/api/connections",
    tag = "connections",
    request_body = CreateConnectionRequest,
    responses(
        (status = 200, description = "连接已创建", body = ApiResponse<ConnectionItem>),
        (status = 400, description = "参数错误")
    )
)]
pub async fn create_connection(
    State(state): State<AppState>,
    Json(req): Json<CreateConnectionRequest>,
) -> Result<Json<ApiResponse<ConnectionItem>>, AppError> {
    let data = connections(&state).create(req).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 根据 ID 获取连接
#[utoipa::path(
    get,
    path = "/api/connections/{id}",
    tag = "connections",
    params(("id" = String, Path, description = "连接 ID")),
    responses(
        (status = 200, description = "连接详情", body = ApiResponse<ConnectionItem>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn get_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ConnectionItem>>, AppError> {
    let data = connections(&state).get(&id).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 删除连接及其历史记录
#[utoipa::path(
    delete,
    path = "/api/connections/{id}",
    tag = "connections",
    params(("id" = String, Path, description = "连接 ID")),
    responses(
        (status = 200, description = "连接已删除", body = ApiResponse<bool>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    connections(&state).delete(&id).await?;
    Ok(Json(ApiResponse::ok_with_service(true, SERVICE_NAME)))
}

/// 测试数据库连接
#[utoipa::path(
    get,
    path = "/api/connections/{id}/test",
    tag = "connections",
    params(("id" = String, Path, description = "连接 ID")),
    responses(
        (status = 200, description = "连接测试结果", body = ApiResponse<ConnectionTestResult>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn test_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ConnectionTestResult>>, AppError> {
    let message = connections(&state).test(&id).await?;
    let data = ConnectionTestResult::new(id, message);
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/info",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID")),
    responses(
        (status = 200, description = "连接概要", body = ApiResponse<ConnectionInfo>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn connection_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ConnectionInfo>>, AppError> {
    let data = explorer(&state).info(&id).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 当前方言的全部语句模板
#[utoipa::path(
    get,
    path = "/api/connections/{id}/templates",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID")),
    responses(
        (status = 200, description = "模板表", body = ApiResponse<BTreeMap<String, Template>>)
    )
)]
pub async fn list_templates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BTreeMap<String, Template>>>, AppError> {
    let data = explorer(&state).templates(&id).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/templates/{key}",
    tag = "explorer",
    params(
        ("id" = String, Path, description = "连接 ID"),
        ("key" = String, Path, description = "模板名，如 create_table")
    ),
    responses(
        (status = 200, description = "模板", body = ApiResponse<Template>),
        (status = 404, description = "模板不存在")
    )
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path((id, key)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Template>>, AppError> {
    let data = explorer(&state).template(&id, &key).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 按类别列出数据库对象
#[utoipa::path(
    get,
    path = "/api/connections/{id}/objects/{kind}",
    tag = "explorer",
    params(
        ("id" = String, Path, description = "连接 ID"),
        ("kind" = String, Path, description = "对象类别，如 tables、indexes、functions"),
        ObjectQuery
    ),
    responses(
        (status = 200, description = "对象列表", body = ApiResponse<DataTable>),
        (status = 400, description = "未知类别"),
        (status = 501, description = "该数据库不支持")
    )
)]
pub async fn list_objects(
    State(state): State<AppState>,
    Path((id, kind)): Path<(String, String)>,
    Query(query): Query<ObjectQuery>,
) -> Result<Json<ApiResponse<DataTable>>, AppError> {
    let data = explorer(&state).objects(&id, &kind, &query).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/objects/{kind}/columns",
    tag = "explorer",
    params(
        ("id" = String, Path, description = "连接 ID"),
        ("kind" = String, Path, description = "foreign_keys、primary_keys、uniques 或 indexes"),
        ObjectColumnsQuery
    ),
    responses(
        (status = 200, description = "约束或索引的列", body = ApiResponse<DataTable>)
    )
)]
pub async fn list_object_columns(
    State(state): State<AppState>,
    Path((id, kind)): Path<(String, String)>,
    Query(query): Query<ObjectColumnsQuery>,
) -> Result<Json<ApiResponse<DataTable>>, AppError> {
    let data = explorer(&state).object_columns(&id, &kind, &query).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/ddl",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID"), ObjectRefQuery),
    responses(
        (status = 200, description = "对象 DDL", body = ApiResponse<String>),
        (status = 404, description = "对象不存在")
    )
)]
pub async fn get_ddl(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(object): Query<ObjectRefQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let data = explorer(&state).ddl(&id, &object).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 对象属性（Property / Value 两列）
#[utoipa::path(
    get,
    path = "/api/connections/{id}/properties",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID"), ObjectRefQuery),
    responses(
        (status = 200, description = "属性表，类型无属性时为空", body = ApiResponse<Option<DataTable>>),
        (status = 404, description = "对象不存在")
    )
)]
pub async fn get_properties(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(object): Query<ObjectRefQuery>,
) -> Result<Json<ApiResponse<Option<DataTable>>>, AppError> {
    let data = explorer(&state).properties(&id, &object).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/definition",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID"), DefinitionQuery),
    responses(
        (status = 200, description = "视图或函数定义", body = ApiResponse<String>)
    )
)]
pub async fn get_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DefinitionQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let data = explorer(&state).definition(&id, &query).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    get,
    path = "/api/connections/{id}/fields",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID"), DefinitionQuery),
    responses(
        (status = 200, description = "函数参数或表的列定义", body = ApiResponse<DataTable>)
    )
)]
pub async fn get_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DefinitionQuery>,
) -> Result<Json<ApiResponse<DataTable>>, AppError> {
    let data = explorer(&state).fields(&id, &query).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 生成 select / insert / update 语句
#[utoipa::path(
    get,
    path = "/api/connections/{id}/generate/{statement}",
    tag = "explorer",
    params(
        ("id" = String, Path, description = "连接 ID"),
        ("statement" = String, Path, description = "select、insert 或 update"),
        GenerateQuery
    ),
    responses(
        (status = 200, description = "生成的语句", body = ApiResponse<String>)
    )
)]
pub async fn generate_statement(
    State(state): State<AppState>,
    Path((id, statement)): Path<(String, String)>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let data = explorer(&state).generate(&id, &statement, &query).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 执行查询并写入查询历史
#[utoipa::path(
    post,
    path = "/api/connections/{id}/query",
    tag = "query",
    params(("id" = String, Path, description = "连接 ID")),
    request_body = QueryDataRequest,
    responses(
        (status = 200, description = "查询结果", body = ApiResponse<DataTable>),
        (status = 422, description = "SQL 执行失败")
    )
)]
pub async fn query_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QueryDataRequest>,
) -> Result<Json<ApiResponse<DataTable>>, AppError> {
    req.validate()?;
    let start = std::time::Instant::now();
    let data = explorer(&state).query(&id, &req.sql, req.limit).await?;
    let duration_ms = start.elapsed().as_millis() as u64;
    Ok(Json(
        ApiResponse::ok_with_service(data, SERVICE_NAME).with_duration(duration_ms),
    ))
}

#[utoipa::path(
    post,
    path = "/api/connections/{id}/records",
    tag = "query",
    params(("id" = String, Path, description = "连接 ID")),
    request_body = TableRecordsRequest,
    responses(
        (status = 200, description = "表数据", body = ApiResponse<DataTable>)
    )
)]
pub async fn table_records(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TableRecordsRequest>,
) -> Result<Json<ApiResponse<DataTable>>, AppError> {
    req.validate()?;
    let data = explorer(&state).records(&id, &req).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

/// 从错误信息中定位出错行列
#[utoipa::path(
    post,
    path = "/api/connections/{id}/error-position",
    tag = "query",
    params(("id" = String, Path, description = "连接 ID")),
    request_body = ErrorPositionRequest,
    responses(
        (status = 200, description = "行列位置，无法定位时为空", body = ApiResponse<Option<ErrorPosition>>)
    )
)]
pub async fn error_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ErrorPositionRequest>,
) -> Result<Json<ApiResponse<Option<ErrorPosition>>>, AppError> {
    let data = explorer(&state)
        .error_position(&id, &req.message, &req.sql)
        .await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    post,
    path = "/api/connections/{id}/rules",
    tag = "explorer",
    params(("id" = String, Path, description = "连接 ID")),
    request_body = RulesRequest,
    responses(
        (status = 200, description = "外键 ON UPDATE / ON DELETE 子句", body = ApiResponse<String>)
    )
)]
pub async fn update_delete_rules(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RulesRequest>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let data = explorer(&state).rules(&id, &req).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    post,
    path = "/api/history/query",
    tag = "history",
    request_body = NewQueryHistory,
    responses(
        (status = 200, description = "已记录", body = ApiResponse<bool>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn add_query_history(
    State(state): State<AppState>,
    Json(entry): Json<NewQueryHistory>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    history(&state).add_query(&entry).await?;
    Ok(Json(ApiResponse::ok_with_service(true, SERVICE_NAME)))
}

#[utoipa::path(
    post,
    path = "/api/history/console",
    tag = "history",
    request_body = NewConsoleHistory,
    responses(
        (status = 200, description = "已记录", body = ApiResponse<bool>),
        (status = 404, description = "连接未找到")
    )
)]
pub async fn add_console_history(
    State(state): State<AppState>,
    Json(entry): Json<NewConsoleHistory>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    history(&state).add_console(&entry).await?;
    Ok(Json(ApiResponse::ok_with_service(true, SERVICE_NAME)))
}

/// 分页查询命令历史
#[utoipa::path(
    post,
    path = "/api/history/list",
    tag = "history",
    request_body = HistoryListRequest,
    responses(
        (status = 200, description = "历史记录页", body = ApiResponse<HistoryPage>),
        (status = 400, description = "连接不存在等错误，消息在 data 字段中")
    )
)]
pub async fn list_history(
    State(state): State<AppState>,
    Json(req): Json<HistoryListRequest>,
) -> Result<Json<ApiResponse<HistoryPage>>, HistoryRejection> {
    let data = history(&state).list(&req).await?;
    Ok(Json(ApiResponse::ok_with_service(data, SERVICE_NAME)))
}

#[utoipa::path(
    post,
    path = "/api/history/clear",
    tag = "history",
    request_body = HistoryFilter,
    responses(
        (status = 204, description = "已清除"),
        (status = 400, description = "连接不存在等错误，消息在 data 字段中")
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Json(filter): Json<HistoryFilter>,
) -> Result<StatusCode, HistoryRejection> {
    history(&state).clear(&filter).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        sessions: state.sessions.count().await,
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
    /// 已打开的数据库会话数
    pub sessions: usize,
}
