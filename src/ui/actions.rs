//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::state::TapPage;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SwitchApp, // Tab 在两个演示应用间切换
    GoTo(TapPage),

    // 核心意图
    Tap,
    Submit, // Enter：搜索提交 / 提现表单确认

    // 表单/通用交互
    NextField,   // Down
    PrevField,   // Up
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Cancel,      // Esc
}
