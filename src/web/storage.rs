//! LocalStorage 访问模块
//!
//! 隐私模式或禁用存储的环境下 `localStorage` 可能不可用，
//! 所有操作都把这种情况当作"键不存在"处理，不向上抛错。

use web_sys::Storage;

fn backend() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// 读取字符串值；键不存在或存储不可用时返回 `None`
pub fn get(key: &str) -> Option<String> {
    backend()?.get_item(key).ok().flatten()
}

/// 写入键值对；存储不可用或配额受限时返回 `false`
pub fn set(key: &str, value: &str) -> bool {
    backend().is_some_and(|s| s.set_item(key, value).is_ok())
}

/// 删除键值对；返回操作是否成功
pub fn remove(key: &str) -> bool {
    backend().is_some_and(|s| s.remove_item(key).is_ok())
}
