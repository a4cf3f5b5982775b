//! 通用 UI 组件
//!
//! 输入框、统计卡片等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [组件] 带有标题和焦点样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 居中的统计卡片（标签 + 数值）
pub fn render_stat_box(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let stat = Paragraph::new(format!("{label}\n{value}"))
        .style(Style::default().fg(Color::White))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stat, area);
}
