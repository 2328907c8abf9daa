//! 搜索框与建议下拉框

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{DirectoryFocus, DirectoryState};
use crate::view::theme::{colors, Styles};

/// 下拉框最多同时显示的条目数
const MAX_VISIBLE_SUGGESTIONS: u16 = 6;

/// 渲染搜索框
pub fn render_input(state: &DirectoryState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = state.focus == DirectoryFocus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let line = if state.view.query.is_empty() {
        Line::styled(t().directory.search_placeholder, Styles::muted())
    } else {
        Line::styled(state.view.query.as_str(), Style::default().fg(c.fg))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let width = u16::try_from(state.view.query.chars().count()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

/// 渲染建议下拉框，覆盖在 `anchor`（搜索框）下方
pub fn render_dropdown(state: &DirectoryState, frame: &mut Frame, anchor: Rect, bounds: Rect) {
    if !state.dropdown_open() {
        return;
    }

    let c = colors();
    let suggestions = state.suggestions();

    let items: Vec<ListItem> = if suggestions.is_empty() {
        vec![ListItem::new(Line::styled(
            t().directory.no_matches,
            Styles::muted(),
        ))]
    } else {
        suggestions
            .iter()
            .map(|user| {
                ListItem::new(Line::from(vec![
                    Span::styled(user.name.as_str(), Style::default().fg(c.fg)),
                    Span::raw("  "),
                    Span::styled(user.email.as_str(), Styles::muted()),
                ]))
            })
            .collect()
    };

    let rows = u16::try_from(items.len())
        .unwrap_or(u16::MAX)
        .min(MAX_VISIBLE_SUGGESTIONS);
    let top = anchor.bottom();
    let height = (rows + 2).min(bounds.bottom().saturating_sub(top));
    if height < 3 {
        return;
    }
    let area = Rect::new(anchor.x, top, anchor.width, height);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(true))
                .style(Style::default().bg(c.bg)),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    list_state.select(state.suggestion_cursor);

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
