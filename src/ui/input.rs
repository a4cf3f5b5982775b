//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;
use std::time::Instant;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Screen, TapPage};

/// 根据当前屏幕/页面和按键获取对应的 Action
pub fn get_action(app: &App, key: KeyCode) -> Option<Action> {
    if key == KeyCode::Tab {
        return Some(Action::SwitchApp);
    }

    match app.screen {
        Screen::Tap => match app.tap.page {
            // 提现页是表单模式，字符按键归输入框
            TapPage::Withdraw => match key {
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Up => Some(Action::PrevField),
                KeyCode::Down => Some(Action::NextField),
                KeyCode::Backspace => Some(Action::DeleteChar),
                KeyCode::Char(c) => Some(Action::Input(c)),
                _ => None,
            },
            page => match key {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char(' ') | KeyCode::Enter if page == TapPage::Home => Some(Action::Tap),
                KeyCode::Char('h') => Some(Action::GoTo(TapPage::Home)),
                KeyCode::Char('l') => Some(Action::GoTo(TapPage::Leaderboard)),
                KeyCode::Char('w') => Some(Action::GoTo(TapPage::Wallet)),
                KeyCode::Char('v') => Some(Action::GoTo(TapPage::Withdraw)),
                KeyCode::Char('p') => Some(Action::GoTo(TapPage::Profile)),
                _ => None,
            },
        },
        Screen::Search => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Up | KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Down => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode, now: Instant) -> io::Result<bool> {
    if let Some(action) = get_action(app, key) {
        Ok(app.dispatch(action, now))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fixtures;

    #[test]
    fn test_tab_switches_everywhere() {
        let mut app = App::new(Fixtures::default());
        assert_eq!(get_action(&app, KeyCode::Tab), Some(Action::SwitchApp));
        app.screen = Screen::Search;
        assert_eq!(get_action(&app, KeyCode::Tab), Some(Action::SwitchApp));
    }

    #[test]
    fn test_space_taps_only_on_home() {
        let mut app = App::new(Fixtures::default());
        assert_eq!(get_action(&app, KeyCode::Char(' ')), Some(Action::Tap));

        app.tap.page = TapPage::Leaderboard;
        assert_eq!(get_action(&app, KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_withdraw_page_captures_chars() {
        let mut app = App::new(Fixtures::default());
        app.tap.page = TapPage::Withdraw;
        // 'q' 在表单模式下是输入而不是退出
        assert_eq!(get_action(&app, KeyCode::Char('q')), Some(Action::Input('q')));
    }
}
