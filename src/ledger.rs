//! 点击账本与推荐账户
//!
//! 点击应用的核心状态：余额/点击计数、动画窗口、会话级推荐码。
//! 定时效果由事件循环的 tick 驱动，不阻塞调用方。

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::Fixtures;

/// 点击后的动画窗口时长
pub const ANIMATION_WINDOW: Duration = Duration::from_millis(300);

/// 点击账本
///
/// `balance` 在会话内单调不减：提现页面只是展示用的占位，
/// 不存在任何扣减操作。
#[derive(Debug, Clone, Default)]
pub struct TapLedger {
    pub balance: u64,
    pub taps: u64,
    is_animating: bool,
    animating_until: Option<Instant>,
}

impl TapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次点击：余额 +1，并打开动画窗口。
    /// 连续点击会覆盖截止时间，窗口在最后一次点击 300ms 后关闭。
    pub fn tap(&mut self, now: Instant) {
        self.balance += 1;
        self.taps += 1;
        self.is_animating = true;
        self.animating_until = Some(now + ANIMATION_WINDOW);
    }

    /// 推进定时器，到期后复位动画标志
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.animating_until {
            if now >= deadline {
                self.is_animating = false;
                self.animating_until = None;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }
}

/// 推荐码来源（测试中注入固定值）
pub trait ReferralCodeSource {
    fn code(&mut self) -> String;
}

/// 生产实现：从 v4 UUID 的十六进制形式截取 8 位。
/// 这里不需要密码学强度，只要求会话内稳定且满足 REF[A-Z0-9]{6,}。
pub struct UuidCodeSource;

impl ReferralCodeSource for UuidCodeSource {
    fn code(&mut self) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("REF{}", hex[..8].to_uppercase())
    }
}

/// 推荐账户，会话期间只读
#[derive(Debug, Clone)]
pub struct ReferralAccount {
    pub referral_code: String,
    pub referral_earnings: f64,
    pub invited_friends: u32,
}

impl ReferralAccount {
    /// 会话开始时调用一次，推荐码此后不再变化
    pub fn new(source: &mut dyn ReferralCodeSource, fixtures: &Fixtures) -> Self {
        Self {
            referral_code: source.code(),
            referral_earnings: fixtures.referral_earnings,
            invited_friends: fixtures.invited_friends,
        }
    }

    /// 总钱包余额（派生值，不存储）
    pub fn total_wallet(&self, balance: u64) -> f64 {
        balance as f64 + self.referral_earnings
    }

    pub fn referral_link(&self) -> String {
        format!("taprubles.com/ref/{}", self.referral_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCodeSource(&'static str);

    impl ReferralCodeSource for FixedCodeSource {
        fn code(&mut self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_tap_increments_balance() {
        let mut ledger = TapLedger::new();
        let t0 = Instant::now();
        for i in 0..10 {
            ledger.tap(t0 + Duration::from_millis(i * 10));
        }
        assert_eq!(ledger.balance, 10);
        assert_eq!(ledger.taps, 10);
    }

    #[test]
    fn test_tap_count_survives_overlapping_timers() {
        let mut ledger = TapLedger::new();
        let t0 = Instant::now();
        // 点击和 tick 交错，计数不丢失也不重复
        for i in 0..100u64 {
            ledger.tap(t0 + Duration::from_millis(i));
            ledger.tick(t0 + Duration::from_millis(i + 1));
        }
        assert_eq!(ledger.balance, 100);
    }

    #[test]
    fn test_animation_window() {
        let mut ledger = TapLedger::new();
        let t0 = Instant::now();
        assert!(!ledger.is_animating());

        ledger.tap(t0);
        assert!(ledger.is_animating());

        ledger.tick(t0 + Duration::from_millis(100));
        assert!(ledger.is_animating());

        ledger.tick(t0 + ANIMATION_WINDOW);
        assert!(!ledger.is_animating());
    }

    #[test]
    fn test_overlapping_taps_extend_animation() {
        let mut ledger = TapLedger::new();
        let t0 = Instant::now();
        ledger.tap(t0);
        ledger.tap(t0 + Duration::from_millis(200));

        // 第一次点击的 300ms 到了，但最后一次还没到
        ledger.tick(t0 + Duration::from_millis(300));
        assert!(ledger.is_animating());

        ledger.tick(t0 + Duration::from_millis(500));
        assert!(!ledger.is_animating());
    }

    #[test]
    fn test_referral_code_pattern() {
        let mut source = UuidCodeSource;
        for _ in 0..20 {
            let code = source.code();
            let suffix = code.strip_prefix("REF").unwrap();
            assert!(suffix.len() >= 6);
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn test_referral_code_stable_within_session() {
        let account = ReferralAccount::new(&mut FixedCodeSource("REFABC123"), &Fixtures::default());
        assert_eq!(account.referral_code, "REFABC123");
        assert_eq!(account.referral_code, "REFABC123");
        assert_eq!(account.referral_link(), "taprubles.com/ref/REFABC123");
    }

    #[test]
    fn test_total_wallet_derived() {
        let account = ReferralAccount::new(&mut FixedCodeSource("REFABC123"), &Fixtures::default());
        assert_eq!(account.referral_earnings, 142.50);
        assert_eq!(account.total_wallet(0), 142.50);
        assert_eq!(account.total_wallet(10), 152.50);
    }
}
