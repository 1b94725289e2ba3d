//! 闲置监控模块
//!
//! 期限判定是纯逻辑（`IdleDeadline`）：活动事件只推后期限时间戳，
//! 不触碰定时器；定时器到期时对照期限，决定清除会话还是按剩余时间续期。
//! 监控随页面卸载一并销毁：监听器移除、未触发的定时器取消。

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

use crate::auth::use_session;
use crate::web::Timeout;

/// 闲置判定窗口：5 分钟
pub const INACTIVITY_TIMEOUT_MS: u32 = 300_000;

/// 重置计时的活动事件
const ACTIVITY_EVENTS: [&str; 2] = ["mousemove", "keydown"];

/// 定时器到期时的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdleStatus {
    /// 期限已过，视为闲置
    Expired,
    /// 期间有活动推后了期限，按剩余毫秒数续期
    Pending { remaining_ms: u32 },
}

/// 闲置期限（纯逻辑，时刻以毫秒时间戳注入）
pub(crate) struct IdleDeadline {
    timeout_ms: u32,
    deadline: f64,
}

impl IdleDeadline {
    pub(crate) fn new(now: f64, timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            deadline: now + f64::from(timeout_ms),
        }
    }

    /// 记录一次活动：期限推后一个完整窗口
    pub(crate) fn record_activity(&mut self, now: f64) {
        self.deadline = now + f64::from(self.timeout_ms);
    }

    /// 到期时刻的判定；剩余时间向上取整，避免过早续期
    pub(crate) fn status(&self, now: f64) -> IdleStatus {
        let remaining = self.deadline - now;
        if remaining <= 0.0 {
            IdleStatus::Expired
        } else {
            IdleStatus::Pending {
                remaining_ms: remaining.ceil() as u32,
            }
        }
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// 闲置监控器
///
/// 持有当前计时器与活动监听闭包；drop 时取消计时并移除监听。
pub struct InactivityMonitor {
    timer: Rc<RefCell<Option<Timeout>>>,
    on_activity: Closure<dyn Fn()>,
}

impl InactivityMonitor {
    /// 启动监控，到期触发 `on_idle`
    pub fn start<F>(timeout_ms: u32, on_idle: F) -> Self
    where
        F: Fn() + 'static,
    {
        let deadline = Rc::new(RefCell::new(IdleDeadline::new(now_ms(), timeout_ms)));
        let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        schedule(&timer, &deadline, Rc::new(on_idle), timeout_ms);

        // 活动事件只推后期限
        let on_activity = {
            let deadline = Rc::clone(&deadline);
            Closure::<dyn Fn()>::new(move || deadline.borrow_mut().record_activity(now_ms()))
        };

        if let Some(window) = web_sys::window() {
            for event in ACTIVITY_EVENTS {
                let _ = window
                    .add_event_listener_with_callback(event, on_activity.as_ref().unchecked_ref());
            }
        }

        Self { timer, on_activity }
    }
}

/// 装填定时器；到期时对照期限决定触发回调还是续期
fn schedule(
    timer: &Rc<RefCell<Option<Timeout>>>,
    deadline: &Rc<RefCell<IdleDeadline>>,
    on_idle: Rc<dyn Fn()>,
    delay_ms: u32,
) {
    let fresh = Timeout::new(delay_ms, {
        let timer = Rc::clone(timer);
        let deadline = Rc::clone(deadline);
        move || match deadline.borrow().status(now_ms()) {
            IdleStatus::Expired => on_idle(),
            IdleStatus::Pending { remaining_ms } => {
                schedule(&timer, &deadline, Rc::clone(&on_idle), remaining_ms)
            }
        }
    });
    *timer.borrow_mut() = Some(fresh);
}

impl Drop for InactivityMonitor {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            for event in ACTIVITY_EVENTS {
                let _ = window.remove_event_listener_with_callback(
                    event,
                    self.on_activity.as_ref().unchecked_ref(),
                );
            }
        }
        // 取消未触发的计时器
        self.timer.borrow_mut().take();
    }
}

/// 在受保护页面挂载闲置监控
///
/// 超时后清除会话（含持久化令牌），重定向由路由服务的会话监听完成。
pub fn use_inactivity_monitor() {
    let session = use_session();

    let monitor = InactivityMonitor::start(INACTIVITY_TIMEOUT_MS, move || {
        web_sys::console::log_1(&"[Inactivity] Idle timeout reached, clearing session.".into());
        session.clear();
    });

    // on_cleanup 要求 Send + Sync 的闭包；监控器持有 Rc 与 JS 闭包，
    // 只存活在单线程 WASM 环境，经 SendWrapper 传入
    let monitor = SendWrapper::new(monitor);
    on_cleanup(move || drop(monitor));
}

#[cfg(test)]
mod tests;
