//! 视图层模块
//!
//! 纯函数：读取 App 状态并渲染，不做任何状态修改

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::state::{App, Screen, SearchField, TapPage, WithdrawField};
use crate::search::SearchStatus;
use components::{render_input_widget, render_stat_box};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题栏
            Constraint::Min(10),    // 当前页面
            Constraint::Length(3),  // 帮助/状态
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Tap => match app.tap.page {
            TapPage::Home => render_home(frame, app, chunks[1]),
            TapPage::Leaderboard => render_leaderboard(frame, app, chunks[1]),
            TapPage::Wallet => render_wallet(frame, app, chunks[1]),
            TapPage::Withdraw => render_withdraw(frame, app, chunks[1]),
            TapPage::Profile => render_profile(frame, app, chunks[1]),
        },
        Screen::Search => render_search(frame, app, chunks[1]),
    }

    render_help(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(20)])
        .split(area);

    let title = match app.screen {
        Screen::Tap => "💰 TapRuble — Заработай кликом",
        Screen::Search => "🔍 Поиск людей",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let balance = Paragraph::new(format!("{} ₽", app.tap.ledger.balance))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .right_aligned()
        .block(Block::default().title("Баланс").borders(Borders::ALL));
    frame.render_widget(balance, chunks[1]);
}

// ============ 点击应用 ============

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 余额
            Constraint::Min(5),    // 按钮
            Constraint::Length(4), // 统计
        ])
        .split(area);

    let balance = Paragraph::new(format!("Твой баланс\n{} ₽", app.tap.ledger.balance))
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(balance, chunks[0]);

    // 动画窗口内按钮高亮
    let button_style = if app.tap.ledger.is_animating() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new("\n👆 TAP!\n\n[Space / Enter]")
        .style(button_style)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, chunks[1]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_stat_box(
        frame,
        stats[0],
        "Всего кликов",
        &app.tap.ledger.taps.to_string(),
    );
    render_stat_box(
        frame,
        stats[1],
        "От рефералов",
        &format!("{:.2} ₽", app.tap.referral.referral_earnings),
    );
}

fn render_leaderboard(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .fixtures
        .leaderboard
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let medal = match i {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            let color = if i < 3 { Color::Yellow } else { Color::Gray };
            let content = format!(
                "{} {}. [{}] {}  —  {} ₽",
                medal,
                i + 1,
                entry.avatar,
                entry.name,
                entry.amount
            );
            ListItem::new(Line::from(Span::styled(
                content,
                Style::default().fg(color),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("🏆 Таблица лидеров")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_wallet(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    let total = Paragraph::new(format!(
        "Общий баланс\n{:.2} ₽",
        app.tap
            .referral
            .total_wallet(app.tap.ledger.balance)
    ))
    .style(
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )
    .centered()
    .block(Block::default().title("Кошелёк").borders(Borders::ALL));
    frame.render_widget(total, chunks[0]);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_stat_box(
        frame,
        split[0],
        "От кликов",
        &format!("{} ₽", app.tap.ledger.balance),
    );
    render_stat_box(
        frame,
        split[1],
        "От рефералов (10%)",
        &format!("{:.2} ₽", app.tap.referral.referral_earnings),
    );
}

fn render_withdraw(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let available = Paragraph::new(format!(
        "Доступно для вывода: {} ₽",
        app.tap.ledger.balance
    ))
    .style(Style::default().fg(Color::Green))
    .block(Block::default().title("↗ Вывод средств").borders(Borders::ALL));
    frame.render_widget(available, chunks[0]);

    render_input_widget(
        frame,
        chunks[1],
        "Сумма вывода",
        &app.tap.withdraw_amount,
        app.tap.withdraw_field == WithdrawField::Amount,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[2],
        "Номер кошелька",
        &app.tap.withdraw_wallet,
        app.tap.withdraw_field == WithdrawField::Wallet,
        Color::Yellow,
    );

    let notice = Paragraph::new(
        "Минимальная сумма вывода: 100 ₽\nВремя обработки: 1-3 рабочих дня\n(демо-режим: заявка никуда не отправляется)",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, chunks[3]);
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        "Твоя реферальная ссылка",
        &app.tap.referral.referral_link(),
        false,
        Color::Yellow,
    );

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_stat_box(
        frame,
        split[0],
        "Баланс",
        &format!("{} ₽", app.tap.ledger.balance),
    );
    render_stat_box(
        frame,
        split[1],
        "От рефералов",
        &format!("{:.2} ₽", app.tap.referral.referral_earnings),
    );

    let program = Paragraph::new(format!(
        "Приглашай друзей и получай 10% от их заработка навсегда.\nПриглашено друзей: {}",
        app.tap.referral.invited_friends
    ))
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("🎁 Реферальная программа")
            .borders(Borders::ALL),
    );
    frame.render_widget(program, chunks[2]);
}

// ============ 搜索应用 ============

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),    // 结果
            Constraint::Length(7), // 历史
        ])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        "Имя",
        &app.search.name,
        app.search.field == SearchField::Name,
        Color::Cyan,
    );
    render_input_widget(
        frame,
        chunks[1],
        "Страна",
        &app.search.country,
        app.search.field == SearchField::Country,
        Color::Cyan,
    );
    render_input_widget(
        frame,
        chunks[2],
        "Телефон",
        &app.search.phone,
        app.search.field == SearchField::Phone,
        Color::Cyan,
    );

    render_search_result(frame, app, chunks[3]);
    render_search_history(frame, app, chunks[4]);
}

fn render_search_result(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.search.session;
    let lines: Vec<Line> = match session.status {
        SearchStatus::Idle => vec![Line::from(Span::styled(
            "Заполните форму и нажмите Enter",
            Style::default().fg(Color::Gray),
        ))],
        SearchStatus::Pending => vec![Line::from(Span::styled(
            "⏳ Идёт поиск...",
            Style::default().fg(Color::Yellow),
        ))],
        SearchStatus::Resolved => match &session.result {
            Some(p) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("{}, {} лет", p.name, p.age),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("{}, {}", p.country, p.city)),
                    Line::from(format!("📞 {}   ✉ {}", p.phone, p.email)),
                    Line::from(format!("{} · {}", p.occupation, p.education)),
                ];
                let socials: Vec<String> = [
                    ("facebook", &p.social.facebook),
                    ("instagram", &p.social.instagram),
                    ("linkedin", &p.social.linkedin),
                    ("twitter", &p.social.twitter),
                ]
                .iter()
                .filter_map(|(net, handle)| {
                    handle.as_ref().map(|h| format!("{net}: {h}"))
                })
                .collect();
                if !socials.is_empty() {
                    lines.push(Line::from(socials.join("  ")));
                }
                if !p.relatives.is_empty() {
                    lines.push(Line::from(format!(
                        "Родственники: {}",
                        p.relatives.join(", ")
                    )));
                }
                lines
            }
            None => Vec::new(),
        },
    };

    let result = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Результат").borders(Borders::ALL));
    frame.render_widget(result, area);
}

fn render_search_history(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .search
        .session
        .history()
        .iter()
        .map(|entry| {
            let content = format!(
                "{}  {} ({})",
                entry.at.format("%H:%M"),
                entry.name,
                entry.label
            );
            ListItem::new(Line::from(Span::styled(
                content,
                Style::default().fg(Color::Gray),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("История поиска")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

// ============ 帮助/状态行 ============

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::Tap => match app.tap.page {
            TapPage::Withdraw => "[↑/↓] Поля  [Enter] Отправить  [Esc] Назад  [Tab] Поиск",
            _ => {
                "[Space] Тап  [h] Главная  [l] Лидеры  [w] Кошелёк  [v] Вывод  [p] Профиль  [Tab] Поиск  [q] Выход"
            }
        },
        Screen::Search => "[↑/↓] Поля  [Enter] Искать  [Esc] Очистить  [Tab] TapRuble",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
