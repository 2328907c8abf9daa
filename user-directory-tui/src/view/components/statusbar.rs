//! 状态栏

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::DirectoryFocus;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;
    let mut items = Vec::new();

    if app.route.is_detail() {
        items.push(("Esc", hints.back));
        items.push(("?", hints.help));
        items.push(("q", hints.quit));
        return items;
    }

    match app.directory.focus {
        DirectoryFocus::Search => {
            items.push(("abc", hints.type_to_search));
            items.push(("Enter", hints.submit));
            if app.directory.dropdown_open() {
                items.push(("↑↓", hints.suggestions));
            }
            items.push(("Tab", hints.to_table));
            items.push(("Alt+h", hints.help));
            items.push(("Alt+q", hints.quit));
        }
        DirectoryFocus::Table => {
            items.push(("↑↓", hints.select));
            items.push(("Enter", hints.open));
            items.push(("←→", hints.page));
            items.push(("/", hints.search));
            items.push(("?", hints.help));
            items.push(("q", hints.quit));
        }
    }

    items
}
