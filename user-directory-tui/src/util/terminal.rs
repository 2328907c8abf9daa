//! 终端初始化和清理

use std::io::{self, IsTerminal, Stdout};
use std::panic;

use anyhow::{bail, Result};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 进入 raw 模式和备用屏幕
///
/// stdout 不是终端时直接报错，不修改终端状态。
pub fn init_terminal() -> Result<Term> {
    if !io::stdout().is_terminal() {
        bail!("user-directory needs an interactive terminal");
    }

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// panic 时先离开备用屏幕，否则 panic 信息会被界面吞掉
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        previous(info);
    }));
}
