//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 一行快捷键说明
fn shortcut<'a>(key: impl Into<String>, desc: &'a str) -> Line<'a> {
    let key = key.into();
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::hint_key()),
        Span::styled(desc, Style::default().fg(colors().fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();
    let heading = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled(help.global_shortcuts, heading),
        Line::from(""),
        shortcut(DefaultKeymap::BACK.label(), help.actions.back),
        shortcut(DefaultKeymap::REFRESH.label(), help.actions.refresh),
        shortcut(DefaultKeymap::TOGGLE_THEME.label(), help.actions.toggle_theme),
        shortcut(DefaultKeymap::TOGGLE_LANGUAGE.label(), help.actions.toggle_language),
        shortcut(format!("{}  ?", DefaultKeymap::HELP.label()), help.actions.help),
        shortcut(
            format!("{}  {}", DefaultKeymap::ALT_QUIT.label(), DefaultKeymap::QUIT.label()),
            help.actions.quit,
        ),
        Line::from(""),
        Line::styled(help.directory_shortcuts, heading),
        Line::from(""),
        shortcut(
            format!("{}  Tab", DefaultKeymap::FOCUS_SEARCH.label()),
            help.actions.focus_search,
        ),
        shortcut("Enter", help.actions.submit_or_pick),
        shortcut("↑↓ / jk", help.actions.move_cursor),
        shortcut("←→ / hl", help.actions.change_page),
        shortcut("Enter", help.actions.open_user),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
