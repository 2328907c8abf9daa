//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 唯一修改 Model 的地方。按消息来源分发：
//!     - directory.rs   用户目录页
//!     - detail.rs      用户详情页
//!     - backend.rs     请求结果
//! 需要发请求时调用 `Navigator::navigate`，由 App 登记 Command。

mod backend;
mod detail;
mod directory;

use user_directory_core::{Navigator, Route};

use crate::i18n::set_language;
use crate::message::AppMessage;
use crate::model::state::DirectoryFocus;
use crate::model::App;
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Directory(directory_msg) => {
            if !app.route.is_detail() {
                directory::update(app, directory_msg);
            }
        }

        AppMessage::Detail(detail_msg) => {
            if app.route.is_detail() {
                detail::update(app, detail_msg);
            }
        }

        AppMessage::Backend(result) => {
            backend::update(app, result);
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 先关闭弹窗
                app.modal.close();
            } else if app.route.is_detail() {
                app.navigate(Route::Directory);
            } else {
                // 目录页：离开搜索框
                app.directory.focus = DirectoryFocus::Table;
                app.directory.suggestion_cursor = None;
            }
        }

        AppMessage::Refresh => {
            app.reload();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            set_theme(app.config.theme);
            app.persist_config();
        }

        AppMessage::ToggleLanguage => {
            let language = app.config.language().next();
            app.config.language = language.code().to_string();
            set_language(language);
            app.set_status(language.display_name());
            app.persist_config();
        }

        AppMessage::Noop => {}
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{BackendMessage, Command, DetailMessage};
    use crate::model::test_support::{app, MemoryConfigService};
    use crate::view::theme::Theme;

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn go_back_closes_modal_before_leaving_detail() {
        let mut app = app();
        app.navigate(Route::user("2"));
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.route.is_detail());

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.route, Route::Directory);
    }

    #[test]
    fn back_to_users_refetches_directory() {
        let mut app = app();
        app.navigate(Route::user("2"));
        app.take_commands();

        update(&mut app, AppMessage::Detail(DetailMessage::BackToUsers));
        assert_eq!(app.route, Route::Directory);
        assert!(app.directory.load.is_loading());
        assert_eq!(app.take_commands(), [Command::LoadDirectory { ticket: 2 }]);
    }

    #[test]
    fn go_back_on_directory_leaves_search() {
        let mut app = app();
        app.navigate(Route::Directory);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.directory.focus, DirectoryFocus::Table);
        assert_eq!(app.route, Route::Directory);
    }

    #[test]
    fn refresh_reissues_current_load() {
        let mut app = app();
        app.navigate(Route::Directory);
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::DirectoryLoaded {
                ticket: 1,
                result: Ok(fixtures::seven_users()),
            }),
        );
        assert!(app.directory.directory().is_some());
        app.take_commands();

        update(&mut app, AppMessage::Refresh);
        assert!(app.directory.load.is_loading());
        assert_eq!(app.take_commands(), [Command::LoadDirectory { ticket: 2 }]);
    }

    #[test]
    fn detail_messages_ignored_on_directory() {
        let mut app = app();
        app.navigate(Route::Directory);
        app.take_commands();
        update(&mut app, AppMessage::Detail(DetailMessage::BackToUsers));
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn toggling_theme_persists_config() {
        let service = MemoryConfigService::default();
        let mut app = App::new(AppConfig::default(), Box::new(service.clone()));

        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, Theme::Light);
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, Theme::Dark);

        let saved = service.saved.lock().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].theme, Theme::Light);
    }

    #[test]
    fn toggling_language_persists_code() {
        let service = MemoryConfigService::default();
        let mut app = App::new(AppConfig::default(), Box::new(service.clone()));

        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(app.config.language, "zh-CN");
        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(app.config.language, "en-US");
        assert_eq!(service.saved.lock().unwrap().len(), 2);
    }
}
