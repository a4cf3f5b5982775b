mod config;
mod ledger;
mod models;
mod search;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::load_fixtures;
use crate::models::Fixtures;
use crate::ui::{App, render};

/// 事件轮询超时：保证动画复位和搜索兑现在无输入时也能触发
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// 夹具文件路径 (~/.local/share/tapmock/fixtures.toml)
fn fixtures_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tapmock").join("fixtures.toml"))
}

fn main() -> io::Result<()> {
    // 夹具可选：没有文件就用内置默认值
    let fixtures = match fixtures_path() {
        Some(path) => load_fixtures(&path)?,
        None => Fixtures::default(),
    };

    // 创建应用状态
    let mut app = App::new(fixtures);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // 有界超时轮询：到点后即使没有按键也推进定时器
        if crossterm::event::poll(TICK_INTERVAL)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    if ui::handle_key_event(app, key.code, Instant::now())? {
                        break;
                    }
                }
            }
        }

        app.on_tick(Instant::now());
    }
    Ok(())
}
