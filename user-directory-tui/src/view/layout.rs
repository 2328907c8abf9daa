//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use user_directory_core::Route;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), frame.area());

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名与当前路由
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!(" {}  {}", t().common.app_name, app.route.path());
    let paragraph = Paragraph::new(title).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前路由渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match &app.route {
        Route::Directory => texts.directory.title.to_string(),
        Route::UserDetail { .. } => app
            .detail
            .load
            .ready()
            .map_or_else(|| texts.detail.title.to_string(), |view| view.title.clone()),
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.route {
        Route::Directory => pages::directory::render(app, frame, inner_area),
        Route::UserDetail { .. } => pages::user_detail::render(app, frame, inner_area),
    }
}
