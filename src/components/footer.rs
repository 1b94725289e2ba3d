//! 页脚组件
//!
//! 展示外部配置的图片与支持联系方式。

use leptos::prelude::*;

use crate::config::use_config;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();

    let image_url = config.footer_image_url.clone();
    let has_image = !image_url.is_empty();

    view! {
        <footer class="footer items-center justify-between bg-base-100 p-4 shadow-inner">
            <Show when=move || has_image>
                <img src=image_url.clone() alt="logo" class="h-16" />
            </Show>
            <p class="text-sm text-base-content/70">
                "For support, contact " {config.support_contact.clone()}
            </p>
        </footer>
    }
}
