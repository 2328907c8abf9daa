//! 应用主循环
//!
//! 每一轮依次：
//!
//! 1. 把导航登记的 Command 交给后端（每次挂载视图恰好一个请求）
//! 2. 渲染
//! 3. 退出检查后收取已完成的请求结果，交给 update
//! 4. 等待输入，最长 100 ms
//!
//! 请求结果只在收取阶段进入状态树，渲染期间状态不变。

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &CoreService) -> Result<()> {
    loop {
        // 1. 派发请求
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 收取结果
        while let Some(result) = backend.try_recv() {
            update::update(app, AppMessage::Backend(result));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
