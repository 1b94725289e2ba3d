//! 应用配置模块
//!
//! 所有外部提供的配置均在构建期通过环境变量注入
//! （`trunk build` 前导出 `STOCKROOM_*` 变量），运行时通过 Context 共享。

/// 外部提供的应用配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 后端 REST API 根地址
    pub api_base_url: String,
    /// 页脚展示图片地址
    pub footer_image_url: String,
    /// 支持联系方式（页脚文案）
    pub support_contact: String,
}

impl AppConfig {
    /// 从构建期环境变量加载配置，缺省时回退到开发默认值
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("STOCKROOM_API_URL").unwrap_or("/api").to_string(),
            footer_image_url: option_env!("STOCKROOM_FOOTER_IMG_URL")
                .unwrap_or("")
                .to_string(),
            support_contact: option_env!("STOCKROOM_SUPPORT_CONTACT")
                .unwrap_or("your administrator")
                .to_string(),
        }
    }
}

/// 从 Context 获取配置
pub fn use_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().expect("AppConfig should be provided")
}
