//! 展示型子组件：条目 / 位置的卡片与列表
//!
//! 纯渲染层：不直接发起 HTTP，数量调整与 Modify 动作以回调形式上抛。

mod item;
mod location;

pub use item::{ItemCard, ItemGrid};
pub use location::{LocationCard, LocationList};

/// 渲染 `<img>` 前校验图片地址
///
/// 仅接受带有主机名的 http/https URL，其余情况回退为无图布局。
pub(crate) fn is_valid_image_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            !host.is_empty()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests;
