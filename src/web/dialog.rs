//! 原生对话框封装模块
//!
//! 错误与操作结果通过阻塞式对话框直接反馈给用户（`window.alert` /
//! `window.confirm`），与远端 API 的既有交互约定保持一致。

/// 弹出阻塞式提示框
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 弹出阻塞式确认框；无法弹出时视为用户取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
