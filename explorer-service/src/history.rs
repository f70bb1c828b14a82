//! 命令历史服务
//!
//! 列表与清除共用同一个过滤条件；分页越界时回到第一页。

use std::sync::Arc;

use common::errors::AppResult;
use common::models::{
    CommandKind, HistoryFilter, HistoryItem, HistoryListRequest, HistoryPage, NewConsoleHistory,
    NewQueryHistory,
};
use validator::Validate;

use crate::store::MetaStore;

/// Page count and effective 1-based page for `count` rows.
pub fn page_window(count: i64, page_size: i64, requested: i64) -> (i64, i64) {
    let size = page_size.max(1);
    let pages = ((count + size - 1) / size).max(1);
    let page = if (1..=pages).contains(&requested) {
        requested
    } else {
        1
    };
    (pages, page)
}

pub struct HistoryService {
    store: Arc<MetaStore>,
    page_size: i64,
}

impl HistoryService {
    pub fn new(store: Arc<MetaStore>, page_size: u32) -> Self {
        Self {
            store,
            page_size: i64::from(page_size),
        }
    }

    pub async fn list(&self, request: &HistoryListRequest) -> AppResult<HistoryPage> {
        request.validate()?;
        let filter = &request.filter;
        self.store.get_connection(&filter.connection_id).await?;

        let count = self.store.count_history(filter).await?;
        let (pages, page) = page_window(count, self.page_size, request.current_page);
        let offset = (page - 1) * self.page_size;

        let command_list = match filter.command_type {
            CommandKind::Query => self
                .store
                .query_history_page(filter, self.page_size, offset)
                .await?
                .into_iter()
                .map(HistoryItem::Query)
                .collect(),
            CommandKind::Console => self
                .store
                .console_history_page(filter, self.page_size, offset)
                .await?
                .into_iter()
                .map(HistoryItem::Console)
                .collect(),
        };
        Ok(HistoryPage {
            command_list,
            pages,
        })
    }

    pub async fn clear(&self, filter: &HistoryFilter) -> AppResult<u64> {
        filter.validate()?;
        self.store.get_connection(&filter.connection_id).await?;
        let removed = self.store.clear_history(filter).await?;
        tracing::info!(
            connection_id = %filter.connection_id,
            kind = ?filter.command_type,
            removed,
            "历史记录已清除"
        );
        Ok(removed)
    }

    pub async fn add_query(&self, entry: &NewQueryHistory) -> AppResult<()> {
        entry.validate()?;
        self.store.get_connection(&entry.connection_id).await?;
        self.store.add_query_history(entry).await
    }

    pub async fn add_console(&self, entry: &NewConsoleHistory) -> AppResult<()> {
        entry.validate()?;
        self.store.get_connection(&entry.connection_id).await?;
        self.store.add_console_history(entry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{memory_store, sample_connection};
    use common::errors::AppError;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(0, 20, 1), (1, 1));
        assert_eq!(page_window(20, 20, 1), (1, 1));
        assert_eq!(page_window(21, 20, 2), (2, 2));
        assert_eq!(page_window(41, 20, 3), (3, 3));
        // 越界回到第一页
        assert_eq!(page_window(41, 20, 4), (3, 1));
        assert_eq!(page_window(41, 20, 0), (3, 1));
    }

    fn request(page: i64, kind: CommandKind) -> HistoryListRequest {
        HistoryListRequest {
            current_page: page,
            filter: HistoryFilter {
                connection_id: "c1".into(),
                command_type: kind,
                command_contains: String::new(),
                command_from: None,
                command_to: None,
            },
        }
    }

    async fn service_with_entries(n: usize) -> HistoryService {
        let store = memory_store().await;
        store.insert_connection(&sample_connection("c1")).await.unwrap();
        let service = HistoryService::new(Arc::new(store), 2);
        for i in 0..n {
            service
                .add_query(&NewQueryHistory {
                    connection_id: "c1".into(),
                    start_time: format!("2024-01-0{}T00:00:00", i + 1),
                    end_time: format!("2024-01-0{}T00:00:01", i + 1),
                    duration: "1.000".into(),
                    status: "success".into(),
                    snippet: format!("select {}", i),
                })
                .await
                .unwrap();
        }
        service
    }

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let service = service_with_entries(5).await;

        let page = service.list(&request(2, CommandKind::Query)).await.unwrap();
        assert_eq!(page.pages, 3);
        assert_eq!(page.command_list.len(), 2);
        match &page.command_list[0] {
            HistoryItem::Query(item) => assert_eq!(item.snippet, "select 2"),
            other => panic!("unexpected item {:?}", other),
        }

        let reset = service.list(&request(9, CommandKind::Query)).await.unwrap();
        match &reset.command_list[0] {
            HistoryItem::Query(item) => assert_eq!(item.snippet, "select 4"),
            other => panic!("unexpected item {:?}", other),
        }

        let console = service.list(&request(1, CommandKind::Console)).await.unwrap();
        assert_eq!(console.pages, 1);
        assert!(console.command_list.is_empty());
    }

    #[tokio::test]
    async fn test_clear_and_unknown_connection() {
        let service = service_with_entries(3).await;
        let removed = service.clear(&request(1, CommandKind::Query).filter).await.unwrap();
        assert_eq!(removed, 3);

        let mut unknown = request(1, CommandKind::Query);
        unknown.filter.connection_id = "missing".into();
        assert!(matches!(
            service.list(&unknown).await,
            Err(AppError::ConnectionNotFound(_))
        ));
        assert!(service.clear(&unknown.filter).await.is_err());
    }
}
