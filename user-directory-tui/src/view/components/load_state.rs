//! 加载中 / 失败 / 不存在 三种非就绪状态

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use user_directory_core::ViewLoad;

use crate::i18n::{fill, t};
use crate::view::theme::{colors, Styles};

/// 渲染非就绪状态；就绪时什么也不画，由调用方渲染内容
pub fn render<T>(load: &ViewLoad<T>, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let lines = match load {
        ViewLoad::Ready(_) => return,
        ViewLoad::Loading => vec![Line::styled(texts.common.loading, Styles::muted())],
        ViewLoad::NotFound(id) => vec![
            Line::styled(
                fill(texts.detail.not_found, &[("id", id)]),
                Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(texts.detail.back_to_users, Styles::muted()),
        ],
        ViewLoad::Failed(message) => vec![
            Line::styled(
                texts.common.error,
                Style::default().fg(c.error).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(message.as_str(), Style::default().fg(c.fg)),
            Line::from(""),
            Line::styled(texts.common.retry_hint, Styles::muted()),
        ],
    };

    // 垂直方向大致居中
    let top = area.height.saturating_sub(u16::try_from(lines.len()).unwrap_or(0)) / 2;
    let body = Rect::new(area.x, area.y + top, area.width, area.height - top);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}
