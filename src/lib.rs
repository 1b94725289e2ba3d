//! Stockroom 库存管理前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫判定（领域模型，纯逻辑）
//! - `web::router`: 路由服务（核心引擎，封装 History API）
//! - `auth`: 会话状态管理（令牌 + 解码后的声明）
//! - `api`: HTTP 客户端与领域服务（items / locations / users）
//! - `components`: UI 组件层

mod api;
mod auth;
mod config;
mod draft;
mod inactivity;
mod models;
mod token;

mod components {
    mod cards;
    pub mod footer;
    pub mod home;
    pub mod login;
    pub mod navbar;
    pub mod register;
    pub mod room_items;
    pub mod update_inventory;
    pub mod update_locations;
    pub mod user_management;
    pub mod user_profile;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod dialog;
    mod http;
    pub mod route;
    pub mod router;
    pub mod storage;
    mod timer;

    pub use http::{HttpClient, HttpError, HttpMethod};
    pub use timer::Timeout;
}

use crate::api::ApiClient;
use crate::auth::SessionContext;
use crate::components::footer::Footer;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::components::room_items::RoomItemsPage;
use crate::components::update_inventory::UpdateInventoryPage;
use crate::components::update_locations::UpdateLocationsPage;
use crate::components::user_management::UserManagementPage;
use crate::components::user_profile::UserProfilePage;
use crate::config::AppConfig;
use crate::draft::PendingItemEdit;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::UpdateInventory => view! { <UpdateInventoryPage /> }.into_any(),
        AppRoute::UpdateLocations => view! { <UpdateLocationsPage /> }.into_any(),
        AppRoute::RoomItems(room) => view! { <RoomItemsPage room=room /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ManageUsers => view! { <UserManagementPage /> }.into_any(),
        AppRoute::UserProfile(username) => {
            view! { <UserProfilePage username=username /> }.into_any()
        }
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 加载外部配置（构建期注入）
    let config = AppConfig::from_build_env();
    provide_context(config.clone());

    // 2. 创建会话上下文并从 LocalStorage 恢复令牌
    let session = SessionContext::new();
    session.init_from_storage();
    provide_context(session);

    // 3. 共享的 API 客户端（携带会话，统一处理 401/403）
    provide_context(ApiClient::new(&config.api_base_url, session));

    // 4. 跨页面的条目编辑草稿传递（替代路由导航 state）
    provide_context(PendingItemEdit::new());

    // 5. 路由器组件：注入会话视图信号实现守卫
    let session_view = session.view_signal();

    view! {
        <Router session=session_view>
            <Navbar />
            <main class="min-h-screen bg-base-200">
                <RouterOutlet matcher=route_matcher />
            </main>
            <Footer />
        </Router>
    }
}
