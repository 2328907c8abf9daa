//! 分页控件
//!
//!     ‹ Previous   Page 1 of 2   Next ›          1-5 of 7

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use user_directory_core::{ListViewState, UserDirectory};

use crate::i18n::{fill, t};
use crate::view::theme::{colors, Styles};

pub fn render(dir: &UserDirectory, view: &ListViewState, frame: &mut Frame, area: Rect) {
    let texts = &t().directory;
    let c = colors();

    let button = |label: String, enabled: bool| {
        if enabled {
            Span::styled(
                label,
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Styles::muted().add_modifier(Modifier::DIM))
        }
    };

    let controls = Line::from(vec![
        button(format!("‹ {}", texts.previous), dir.can_go_previous(view)),
        Span::raw("   "),
        Span::styled(
            fill(
                texts.page_of,
                &[
                    ("current", &view.current_page),
                    ("total", &dir.total_pages(view)),
                ],
            ),
            Style::default().fg(c.fg),
        ),
        Span::raw("   "),
        button(format!("{} ›", texts.next), dir.can_go_next(view)),
    ]);

    let summary = dir
        .page_range(view)
        .map(|(first, last, total)| {
            fill(
                texts.range,
                &[("first", &first), ("last", &last), ("total", &total)],
            )
        })
        .unwrap_or_default();

    let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);
    frame.render_widget(Paragraph::new(controls), left);
    frame.render_widget(
        Paragraph::new(Line::styled(summary, Styles::muted()).right_aligned()),
        right,
    );
}
