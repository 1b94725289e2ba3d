//! 草稿传递模块
//!
//! 跨页面携带"待编辑条目"：房间条目页点击 Modify 后，条目草稿经由
//! 此上下文交给库存维护页，替代路由导航 state 的隐式传参。

use leptos::prelude::*;

use crate::models::Item;

/// 待编辑的条目草稿（一次性取用）
#[derive(Clone, Copy)]
pub struct PendingItemEdit(RwSignal<Option<Item>>);

impl PendingItemEdit {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// 存入草稿，随后应导航到库存维护页
    pub fn set(&self, item: Item) {
        self.0.set(Some(item));
    }

    /// 取出并清空草稿
    pub fn take(&self) -> Option<Item> {
        self.0.try_update(|slot| slot.take()).flatten()
    }
}

/// 从 Context 获取草稿传递上下文
pub fn use_pending_edit() -> PendingItemEdit {
    use_context::<PendingItemEdit>().expect("PendingItemEdit should be provided")
}
