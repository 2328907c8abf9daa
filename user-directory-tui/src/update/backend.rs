//! 请求结果处理

use user_directory_core::{present, UserDirectory, ViewLoad};

use crate::message::BackendMessage;
use crate::model::App;

/// 把请求结果写入对应视图
///
/// 结果的 ticket 与当前导航不一致时说明视图已被替换，直接丢弃。
pub fn update(app: &mut App, msg: BackendMessage) {
    if msg.ticket() != app.ticket() {
        log::debug!("Dropping stale result for ticket {}", msg.ticket());
        return;
    }

    match msg {
        BackendMessage::DirectoryLoaded { result, .. } => {
            let page_size = app.config.effective_page_size();
            app.directory.load =
                ViewLoad::from_result(result.map(|users| UserDirectory::new(users, page_size)));
        }
        BackendMessage::UserLoaded { result, .. } => {
            app.detail.load = ViewLoad::from_result(result.map(|user| present(&user)));
        }
    }
}
