//! 存储位置服务

use super::{ApiClient, ApiError};
use crate::models::Location;
use crate::web::HttpMethod;

impl ApiClient {
    /// 获取全部位置
    pub async fn list_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get_json("/locations").await
    }

    /// 新增位置
    pub async fn create_location(&self, location: &Location) -> Result<Location, ApiError> {
        self.send_json(HttpMethod::Post, "/locations", location)
            .await
    }

    /// 更新位置
    pub async fn update_location(&self, id: &str, location: &Location) -> Result<Location, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/locations/{}", id), location)
            .await
    }

    /// 删除位置
    pub async fn delete_location(&self, id: &str) -> Result<(), ApiError> {
        self.delete_expect_empty(&format!("/locations/{}", id))
            .await
    }
}
