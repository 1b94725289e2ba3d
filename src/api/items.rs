//! 库存条目服务
//!
//! 每个 CRUD 动作对应一次 `/inventory` 调用。

use super::{ApiClient, ApiError};
use crate::models::{Item, ItemQuery};
use crate::web::HttpMethod;

impl ApiClient {
    /// 获取条目列表，可选按 Location / Name 过滤
    pub async fn list_items(&self, query: Option<&ItemQuery>) -> Result<Vec<Item>, ApiError> {
        let path = match query {
            Some(q) => format!("/inventory{}", q.to_query_string()),
            None => "/inventory".to_string(),
        };
        self.get_json(&path).await
    }

    /// 新增条目
    pub async fn create_item(&self, item: &Item) -> Result<Item, ApiError> {
        self.send_json(HttpMethod::Post, "/inventory", item).await
    }

    /// 更新条目
    pub async fn update_item(&self, id: &str, item: &Item) -> Result<Item, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/inventory/{}", id), item)
            .await
    }

    /// 删除条目
    pub async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        self.delete_expect_empty(&format!("/inventory/{}", id)).await
    }
}
