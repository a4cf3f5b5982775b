//! App 状态定义 (Model)
//!
//! 两个演示应用的全部状态都集中在这里，视图层只读取、不持有。

use crate::ledger::{ReferralAccount, ReferralCodeSource, TapLedger, UuidCodeSource};
use crate::models::{Fixtures, SearchQuery};
use crate::search::{FixtureLookup, SearchSession};

/// 当前所在的演示应用（Tab 切换）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tap,
    Search,
}

/// 点击应用的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapPage {
    Home,
    Leaderboard,
    Wallet,
    Withdraw,
    Profile,
}

/// 提现表单的输入字段（仅展示，不会动余额）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawField {
    Amount,
    Wallet,
}

/// 搜索表单的输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Country,
    Phone,
}

/// 点击应用状态
pub struct TapApp {
    pub ledger: TapLedger,
    pub referral: ReferralAccount,
    pub page: TapPage,
    pub withdraw_field: WithdrawField,
    pub withdraw_amount: String,
    pub withdraw_wallet: String,
}

/// 搜索应用状态
pub struct SearchApp {
    pub session: SearchSession,
    pub field: SearchField,
    pub name: String,
    pub country: String,
    pub phone: String,
}

impl SearchApp {
    /// 表单当前内容，字段原样提交（不做裁剪或校验）
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            name: self.name.clone(),
            country: self.country.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// 应用状态
pub struct App {
    pub screen: Screen,
    pub tap: TapApp,
    pub search: SearchApp,
    pub fixtures: Fixtures,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(fixtures: Fixtures) -> Self {
        Self::with_code_source(fixtures, &mut UuidCodeSource)
    }

    /// 推荐码来源可注入，测试用
    pub fn with_code_source(fixtures: Fixtures, source: &mut dyn ReferralCodeSource) -> Self {
        let referral = ReferralAccount::new(source, &fixtures);
        let session = SearchSession::new(Box::new(FixtureLookup::new(fixtures.clone())));
        Self {
            screen: Screen::Tap,
            tap: TapApp {
                ledger: TapLedger::new(),
                referral,
                page: TapPage::Home,
                withdraw_field: WithdrawField::Amount,
                withdraw_amount: String::new(),
                withdraw_wallet: String::new(),
            },
            search: SearchApp {
                session,
                field: SearchField::Name,
                name: String::new(),
                country: String::new(),
                phone: String::new(),
            },
            fixtures,
            message: None,
        }
    }
}
