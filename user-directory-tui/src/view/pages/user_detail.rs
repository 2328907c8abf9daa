//! 用户详情页
//!
//! 标题为用户姓名，下方依次是个人信息、地址、公司三张卡片。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use user_directory_core::{DetailSection, DetailView, DisplayField};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::load_state;
use crate::view::theme::{colors, Styles};

/// 渲染用户详情页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [back_area, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    render_back_link(frame, back_area);

    let Some(view) = app.detail.load.ready() else {
        load_state::render(&app.detail.load, frame, body);
        return;
    };

    render_cards(view, frame, body);
}

/// “返回用户列表”
fn render_back_link(frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::styled("← ", Style::default().fg(c.highlight)),
        Span::styled(
            t().detail.back_to_users,
            Style::default().fg(c.highlight).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled("  (Esc)", Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 三张卡片纵向排列，高度按字段数分配
fn render_cards(view: &DetailView, frame: &mut Frame, area: Rect) {
    let sections = view.sections();
    let constraints = sections.iter().map(|(_, fields)| {
        Constraint::Length(u16::try_from(fields.len()).unwrap_or(u16::MAX).saturating_add(2))
    });
    let areas = Layout::vertical(constraints).split(area);

    for ((section, fields), card_area) in sections.iter().zip(areas.iter()) {
        render_card(*section, fields, frame, *card_area);
    }
}

fn render_card(section: DetailSection, fields: &[DisplayField], frame: &mut Frame, area: Rect) {
    let texts = &t().detail;
    let c = colors();

    let label_width = fields
        .iter()
        .map(|field| texts.field(field.label).chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = fields
        .iter()
        .map(|field| {
            let label = format!(" {:<label_width$}  ", texts.field(field.label));
            let value = match &field.link {
                Some(link) => Span::styled(
                    link.as_str(),
                    Style::default().fg(c.link).add_modifier(Modifier::UNDERLINED),
                ),
                None => Span::styled(field.value.as_str(), Style::default().fg(c.fg)),
            };
            Line::from(vec![Span::styled(label, Styles::muted()), value])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", texts.section(section)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
