//! 用户目录页
//!
//!     ┌ 搜索框 ─────────────────────────────┐
//!     └─────────────────────────────────────┘
//!       建议下拉框（覆盖在表格之上）
//!     姓名 / @用户名 │ 邮箱 │ 公司 │ 电话
//!     ...
//!     ‹ Previous   Page 1 of 2   Next ›

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use user_directory_core::{ListViewState, UserDirectory};

use crate::i18n::t;
use crate::model::state::DirectoryFocus;
use crate::model::App;
use crate::view::components::{load_state, pagination, search};
use crate::view::theme::{colors, Styles};

/// 渲染用户目录页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.directory;

    let Some(dir) = state.directory() else {
        load_state::render(&state.load, frame, area);
        return;
    };

    let [search_area, table_area, pager_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    search::render_input(state, frame, search_area);
    render_table(app, dir, &state.view, frame, table_area);
    pagination::render(dir, &state.view, frame, pager_area);

    // 下拉框最后渲染，覆盖在表格上方
    search::render_dropdown(state, frame, search_area, area);
}

/// 渲染当前页的用户表格
fn render_table(
    app: &App,
    dir: &UserDirectory,
    view: &ListViewState,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().directory;
    let c = colors();
    let page = dir.visible_page(view);

    if page.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {}", texts.no_users), Styles::muted()),
        ]);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([
        texts.col_name,
        texts.col_email,
        texts.col_company,
        texts.col_phone,
    ])
    .style(Styles::title())
    .bottom_margin(1);

    let rows = page.iter().map(|user| {
        let name = Text::from(vec![
            Line::styled(user.name.as_str(), Style::default().fg(c.fg)),
            Line::styled(format!("@{}", user.username), Styles::muted()),
        ]);
        Row::new([
            Cell::from(name),
            Cell::from(user.email.as_str()),
            Cell::from(user.company.name.as_str()),
            Cell::from(user.phone.as_str()),
        ])
        .height(2)
        .style(Style::default().fg(c.fg))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(28),
            Constraint::Percentage(22),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected());

    // 焦点不在表格时不显示选中行
    let mut table_state = TableState::default();
    if app.directory.focus == DirectoryFocus::Table {
        table_state.select(Some(app.directory.selected));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}
