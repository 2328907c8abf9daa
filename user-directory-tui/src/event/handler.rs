//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DetailMessage, DirectoryMessage};
use crate::model::state::DirectoryFocus;
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if app.route.is_detail() {
        return handle_detail_keys(key);
    }

    match app.directory.focus {
        DirectoryFocus::Search => handle_search_keys(key),
        DirectoryFocus::Table => handle_table_keys(key),
    }
}

/// 焦点不在输入框时通用的按键
fn handle_plain_keys(key: KeyEvent) -> Option<AppMessage> {
    if DefaultKeymap::QUIT.matches(&key) {
        return Some(AppMessage::Quit);
    }
    if key.code == KeyCode::Char('?') {
        return Some(AppMessage::ShowHelp);
    }
    None
}

/// 处理详情页的按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_plain_keys(key) {
        return msg;
    }

    match key.code {
        // Backspace / b: 返回用户列表
        KeyCode::Backspace | KeyCode::Char('b') => {
            AppMessage::Detail(DetailMessage::BackToUsers)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Enter => DirectoryMessage::Submit,
        KeyCode::Backspace => DirectoryMessage::Backspace,
        KeyCode::Down => DirectoryMessage::SuggestionNext,
        KeyCode::Up => DirectoryMessage::SuggestionPrevious,
        KeyCode::Tab => DirectoryMessage::FocusTable,

        // 字符输入（允许 Shift 输入大写）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            DirectoryMessage::Input(ch)
        }

        _ => return AppMessage::Noop,
    };

    AppMessage::Directory(msg)
}

/// 处理用户表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_plain_keys(key) {
        return msg;
    }

    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::Directory(DirectoryMessage::FocusSearch);
    }
    if DefaultKeymap::PREV_PAGE.matches(&key) {
        return AppMessage::Directory(DirectoryMessage::PreviousPage);
    }
    if DefaultKeymap::NEXT_PAGE.matches(&key) {
        return AppMessage::Directory(DirectoryMessage::NextPage);
    }

    let msg = match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => DirectoryMessage::SelectPrevious,
        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => DirectoryMessage::SelectNext,
        KeyCode::Home => DirectoryMessage::SelectFirst,
        KeyCode::End => DirectoryMessage::SelectLast,
        // Enter: 打开详情
        KeyCode::Enter => DirectoryMessage::OpenSelected,
        // h / PageUp: 上一页
        KeyCode::PageUp | KeyCode::Char('h') => DirectoryMessage::PreviousPage,
        // l / PageDown: 下一页
        KeyCode::PageDown | KeyCode::Char('l') => DirectoryMessage::NextPage,
        // Tab: 回到搜索框
        KeyCode::Tab => DirectoryMessage::FocusSearch,
        _ => return AppMessage::Noop,
    };

    AppMessage::Directory(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')) => {
            AppMessage::CloseModal
        }
        _ => AppMessage::Noop,
    }
}
