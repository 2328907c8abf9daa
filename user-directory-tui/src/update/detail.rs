//! 用户详情页消息处理

use user_directory_core::{Navigator, Route};

use crate::message::DetailMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: DetailMessage) {
    match msg {
        DetailMessage::BackToUsers => app.navigate(Route::Directory),
    }
}
