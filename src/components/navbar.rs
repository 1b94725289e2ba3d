//! 导航栏组件
//!
//! 根据会话状态展示不同的链接集合；admin 额外获得用户管理入口。

use leptos::prelude::*;

use crate::auth::use_session;
use crate::models::Role;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    let is_authenticated = move || session.is_authenticated();
    let is_admin = move || session.role() == Some(Role::Admin);

    let on_logout = move |_| {
        // 导航由路由服务的会话监听自动处理
        session.clear();
    };

    view! {
        <nav class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">
                    "Inventory Home"
                </Link>
            </div>
            <Show
                when=is_authenticated
                fallback=|| {
                    view! {
                        <div class="flex-none">
                            <Link to=AppRoute::Login class="btn btn-ghost">
                                "Login"
                            </Link>
                        </div>
                    }
                }
            >
                <div class="flex-none gap-2">
                    <Link to=AppRoute::UpdateInventory class="btn btn-ghost">
                        "Items"
                    </Link>
                    <Link to=AppRoute::UpdateLocations class="btn btn-ghost">
                        "Locations"
                    </Link>
                    <Show when=is_admin>
                        <Link to=AppRoute::Register class="btn btn-ghost">
                            "Add User"
                        </Link>
                        <Link to=AppRoute::ManageUsers class="btn btn-ghost">
                            "Manage Users"
                        </Link>
                    </Show>
                    <button class="btn btn-error btn-outline" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
