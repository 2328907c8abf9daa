//! 应用主状态

use user_directory_core::{Navigator, Route};

use super::state::{DetailState, DirectoryState, ModalState};
use crate::backend::{AppConfig, ConfigService};
use crate::message::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前路由
    pub route: Route,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 用户目录页状态
    pub directory: DirectoryState,
    /// 用户详情页状态
    pub detail: DetailState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,
    config_service: Box<dyn ConfigService>,

    /// 最近一次导航的编号，后端结果凭此判断是否过期
    ticket: u64,
    /// 等待派发的请求
    commands: Vec<Command>,
}

impl App {
    /// 创建新的应用实例（尚未挂载任何视图）
    pub fn new(config: AppConfig, config_service: Box<dyn ConfigService>) -> Self {
        Self {
            should_quit: false,
            route: Route::default(),
            status_message: None,
            directory: DirectoryState::new(),
            detail: DetailState::default(),
            modal: ModalState::default(),
            config,
            config_service,
            ticket: 0,
            commands: Vec::new(),
        }
    }

    /// 当前导航编号
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// 取走所有待派发的请求
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// 重新挂载当前路由
    pub fn reload(&mut self) {
        let route = self.route.clone();
        self.navigate(route);
    }

    /// 保存配置，失败时显示在状态栏
    pub fn persist_config(&mut self) {
        if let Err(e) = self.config_service.save(&self.config) {
            log::error!("Failed to save config: {e:#}");
            self.set_status(format!("{e:#}"));
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Navigator for App {
    /// 切换到目标路由：挂载新视图并登记它的唯一一次请求
    fn navigate(&mut self, route: Route) {
        self.ticket += 1;
        let ticket = self.ticket;
        log::info!("Navigate to {route}");

        match &route {
            Route::Directory => {
                self.directory = DirectoryState::new();
                self.commands.push(Command::LoadDirectory { ticket });
            }
            Route::UserDetail { user_id } => {
                self.detail = DetailState::new(user_id.clone());
                self.commands.push(Command::LoadUser {
                    ticket,
                    user_id: user_id.clone(),
                });
            }
        }

        self.route = route;
        self.clear_status();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::app;
    use super::*;

    #[test]
    fn new_app_has_nothing_to_dispatch() {
        let mut app = app();
        assert!(app.take_commands().is_empty());
        assert_eq!(app.route, Route::Directory);
    }

    #[test]
    fn navigate_mounts_view_and_queues_one_fetch() {
        let mut app = app();
        app.navigate(Route::user("3"));

        assert_eq!(app.route.path(), "/users/3");
        assert_eq!(app.detail.user_id, "3");
        assert!(app.detail.load.is_loading());
        assert_eq!(
            app.take_commands(),
            [Command::LoadUser {
                ticket: 1,
                user_id: "3".to_string()
            }]
        );
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn returning_to_directory_resets_its_state() {
        let mut app = app();
        app.navigate(Route::Directory);
        app.directory.view.query = "stale".to_string();
        app.directory.selected = 3;

        app.navigate(Route::user("1"));
        app.navigate(Route::Directory);

        assert!(app.directory.view.query.is_empty());
        assert_eq!(app.directory.selected, 0);
        assert_eq!(app.ticket(), 3);
        let tickets: Vec<u64> = app.take_commands().iter().map(Command::ticket).collect();
        assert_eq!(tickets, [1, 2, 3]);
    }

    #[test]
    fn reload_refetches_current_route() {
        let mut app = app();
        app.navigate(Route::user("9"));
        app.take_commands();

        app.reload();
        assert_eq!(
            app.take_commands(),
            [Command::LoadUser {
                ticket: 2,
                user_id: "9".to_string()
            }]
        );
    }
}
