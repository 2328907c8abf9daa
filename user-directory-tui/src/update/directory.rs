//! 用户目录页消息处理
//!
//! 搜索与分页全部委托给 `UserDirectory` 的状态转换，这里只维护
//! 键盘焦点、行光标和建议光标。数据未就绪时忽略所有输入。

use user_directory_core::{Navigator, Route, UserDirectory};

use crate::message::DirectoryMessage;
use crate::model::state::{DirectoryFocus, DirectoryState};
use crate::model::App;

pub fn update(app: &mut App, msg: DirectoryMessage) {
    match msg {
        DirectoryMessage::OpenSelected => open_selected(app),
        other => {
            apply(&mut app.directory, other);
            app.directory.clamp_selection();
        }
    }
}

/// 打开选中行对应的用户详情
fn open_selected(app: &mut App) {
    if let Some(user_id) = app.directory.selected_user().map(|user| user.id.to_string()) {
        app.navigate(Route::user(user_id));
    }
}

/// 页内状态变化
fn apply(state: &mut DirectoryState, msg: DirectoryMessage) {
    let DirectoryState {
        load,
        view,
        focus,
        selected,
        suggestion_cursor,
    } = state;

    let Some(dir) = load.ready() else {
        return;
    };

    match msg {
        // === 搜索框 ===
        DirectoryMessage::Input(ch) => {
            let mut query = view.query.clone();
            query.push(ch);
            *view = dir.on_query_change(view, query);
            *focus = DirectoryFocus::Search;
            *suggestion_cursor = None;
        }
        DirectoryMessage::Backspace => {
            let mut query = view.query.clone();
            if query.pop().is_some() {
                *view = dir.on_query_change(view, query);
                *suggestion_cursor = None;
            }
        }
        DirectoryMessage::Submit => {
            let dropdown_open = UserDirectory::shows_suggestions(view);
            let picked = (*suggestion_cursor)
                .filter(|_| dropdown_open)
                .and_then(|i| dir.suggestions(view).get(i).map(|user| (*user).clone()));

            *view = match picked {
                Some(user) => dir.on_suggestion_pick(view, &user),
                None => {
                    *selected = 0;
                    dir.on_submit(view)
                }
            };
            *suggestion_cursor = None;
        }
        DirectoryMessage::SuggestionNext => {
            if UserDirectory::shows_suggestions(view) {
                let count = dir.suggestions(view).len();
                *suggestion_cursor = match (*suggestion_cursor, count) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), n) => Some((i + 1).min(n - 1)),
                };
            } else {
                // 没有下拉框时，↓ 进入表格
                *focus = DirectoryFocus::Table;
            }
        }
        DirectoryMessage::SuggestionPrevious => {
            *suggestion_cursor = match *suggestion_cursor {
                Some(0) | None => None,
                Some(i) => Some(i - 1),
            };
        }

        // === 焦点 ===
        DirectoryMessage::FocusSearch => {
            *focus = DirectoryFocus::Search;
            *suggestion_cursor = None;
        }
        DirectoryMessage::FocusTable => {
            *focus = DirectoryFocus::Table;
            *suggestion_cursor = None;
        }

        // === 表格 ===
        DirectoryMessage::SelectPrevious => {
            *selected = selected.saturating_sub(1);
        }
        DirectoryMessage::SelectNext => {
            *selected += 1;
        }
        DirectoryMessage::SelectFirst => {
            *selected = 0;
        }
        DirectoryMessage::SelectLast => {
            *selected = dir.visible_page(view).len().saturating_sub(1);
        }
        // 由 open_selected 处理
        DirectoryMessage::OpenSelected => {}

        // === 分页 ===
        DirectoryMessage::PreviousPage => {
            *view = dir.on_page_change(view, -1);
            *selected = 0;
        }
        DirectoryMessage::NextPage => {
            *view = dir.on_page_change(view, 1);
            *selected = 0;
        }
    }
}
