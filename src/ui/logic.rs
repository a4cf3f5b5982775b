//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和定时器推进

use std::time::Instant;

use super::actions::Action;
use super::state::{App, Screen, SearchField, TapPage, WithdrawField};
use crate::search::SearchStatus;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,

            Action::SwitchApp => {
                self.screen = match self.screen {
                    Screen::Tap => Screen::Search,
                    Screen::Search => Screen::Tap,
                };
                self.message = None;
            }

            Action::GoTo(page) => {
                self.tap.page = page;
                self.message = None;
            }

            Action::Tap => self.tap.ledger.tap(now),

            Action::Submit => match self.screen {
                Screen::Search => self.submit_search(now),
                Screen::Tap if self.tap.page == TapPage::Withdraw => self.submit_withdraw(),
                Screen::Tap => {}
            },

            Action::NextField => self.cycle_field(true),
            Action::PrevField => self.cycle_field(false),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Cancel => self.cancel(),
        }
        false
    }

    /// 推进所有定时器（动画复位、搜索兑现）
    pub fn on_tick(&mut self, now: Instant) {
        self.tap.ledger.tick(now);

        let was_pending = self.search.session.status == SearchStatus::Pending;
        self.search.session.tick(now);
        if was_pending && self.search.session.status == SearchStatus::Resolved {
            self.message = Some("Поиск завершён".to_string());
        }
    }

    // ============ 搜索相关 ============

    /// 提交搜索表单（空表单也接受，兑现时用回退值）
    fn submit_search(&mut self, now: Instant) {
        self.search.session.submit(self.search.query(), now);
        self.message = Some("Идёт поиск...".to_string());
    }

    // ============ 提现相关 ============

    /// 提现只是展示用的占位：余额保持不变
    fn submit_withdraw(&mut self) {
        if self.tap.withdraw_amount.is_empty() || self.tap.withdraw_wallet.is_empty() {
            self.message = Some("Заполните сумму и номер кошелька".to_string());
            return;
        }
        self.tap.withdraw_amount.clear();
        self.tap.withdraw_wallet.clear();
        self.message = Some("Заявка принята (демо): баланс не изменяется".to_string());
    }

    // ============ 表单交互 ============

    fn cycle_field(&mut self, forward: bool) {
        match self.screen {
            Screen::Search => {
                self.search.field = match (self.search.field, forward) {
                    (SearchField::Name, true) | (SearchField::Phone, false) => SearchField::Country,
                    (SearchField::Country, true) | (SearchField::Name, false) => SearchField::Phone,
                    (SearchField::Phone, true) | (SearchField::Country, false) => SearchField::Name,
                };
            }
            Screen::Tap if self.tap.page == TapPage::Withdraw => {
                self.tap.withdraw_field = match self.tap.withdraw_field {
                    WithdrawField::Amount => WithdrawField::Wallet,
                    WithdrawField::Wallet => WithdrawField::Amount,
                };
            }
            Screen::Tap => {}
        }
    }

    fn input_char(&mut self, c: char) {
        match self.screen {
            Screen::Search => match self.search.field {
                SearchField::Name => self.search.name.push(c),
                SearchField::Country => self.search.country.push(c),
                SearchField::Phone => self.search.phone.push(c),
            },
            Screen::Tap if self.tap.page == TapPage::Withdraw => match self.tap.withdraw_field {
                // 金额只接受数字
                WithdrawField::Amount => {
                    if c.is_ascii_digit() {
                        self.tap.withdraw_amount.push(c);
                    }
                }
                WithdrawField::Wallet => self.tap.withdraw_wallet.push(c),
            },
            Screen::Tap => {}
        }
    }

    fn delete_char(&mut self) {
        match self.screen {
            Screen::Search => {
                match self.search.field {
                    SearchField::Name => self.search.name.pop(),
                    SearchField::Country => self.search.country.pop(),
                    SearchField::Phone => self.search.phone.pop(),
                };
            }
            Screen::Tap if self.tap.page == TapPage::Withdraw => {
                match self.tap.withdraw_field {
                    WithdrawField::Amount => self.tap.withdraw_amount.pop(),
                    WithdrawField::Wallet => self.tap.withdraw_wallet.pop(),
                };
            }
            Screen::Tap => {}
        }
    }

    /// 取消当前操作
    fn cancel(&mut self) {
        match self.screen {
            Screen::Search => {
                self.search.name.clear();
                self.search.country.clear();
                self.search.phone.clear();
                self.search.field = SearchField::Name;
            }
            Screen::Tap if self.tap.page == TapPage::Withdraw => {
                self.tap.withdraw_amount.clear();
                self.tap.withdraw_wallet.clear();
                self.tap.withdraw_field = WithdrawField::Amount;
                self.tap.page = TapPage::Wallet;
            }
            Screen::Tap => {}
        }
        self.message = None;
    }
}
