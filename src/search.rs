//! 人员搜索会话状态机
//!
//! `Idle → Pending → Resolved`，之后的每次提交回到 Pending。
//! 查询是模拟的：固定延迟后由 `ProfileLookup` 合成档案，永远"成功"。
//! 延迟兑现由事件循环的 tick 驱动，提交本身立即返回。

use std::time::{Duration, Instant};

use chrono::Local;

use crate::models::{Fixtures, HistoryEntry, Profile, SearchQuery};

/// 模拟的查询延迟
pub const SEARCH_LATENCY: Duration = Duration::from_millis(1500);

/// 历史记录条数上限
pub const HISTORY_CAP: usize = 5;

/// 新历史条目的标记
pub const JUST_NOW: &str = "Только что";

/// 查询状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Pending,
    Resolved,
}

/// 档案查询能力，真实数据源的替换接缝
pub trait ProfileLookup {
    fn resolve(&self, query: &SearchQuery) -> Profile;
}

/// 夹具实现：非空字段原样返回，空字段用回退值，其余字段是固定常量
pub struct FixtureLookup {
    fixtures: Fixtures,
}

impl FixtureLookup {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }
}

impl ProfileLookup for FixtureLookup {
    fn resolve(&self, query: &SearchQuery) -> Profile {
        let fb = &self.fixtures.fallbacks;
        let pick = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        self.fixtures.profile.materialize(
            pick(&query.name, &fb.name),
            pick(&query.country, &fb.country),
            pick(&query.phone, &fb.phone),
        )
    }
}

/// 进行中的查询
#[derive(Debug, Clone)]
struct PendingLookup {
    seq: u64,
    deadline: Instant,
    query: SearchQuery,
}

/// 搜索会话
pub struct SearchSession {
    pub status: SearchStatus,
    pub result: Option<Profile>,
    history: Vec<HistoryEntry>,
    pending: Option<PendingLookup>,
    seq: u64,
    lookup: Box<dyn ProfileLookup>,
}

impl SearchSession {
    pub fn new(lookup: Box<dyn ProfileLookup>) -> Self {
        Self {
            status: SearchStatus::Idle,
            result: None,
            history: Vec::new(),
            pending: None,
            seq: 0,
            lookup,
        }
    }

    /// 提交查询：立即返回，结果在 1500ms 后由 tick 兑现。
    /// 空查询也会被接受，回退值在兑现时填充。
    /// 重复提交会取代仍在进行中的查询，只有最新的序号会兑现。
    pub fn submit(&mut self, query: SearchQuery, now: Instant) {
        self.seq += 1;
        self.status = SearchStatus::Pending;
        self.result = None;
        self.pending = Some(PendingLookup {
            seq: self.seq,
            deadline: now + SEARCH_LATENCY,
            query,
        });
    }

    /// 推进定时器：到期的查询转入 Resolved
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending.take_if(|p| now >= p.deadline) else {
            return;
        };
        if pending.seq != self.seq {
            return;
        }

        let profile = self.lookup.resolve(&pending.query);
        // 只有非空姓名才进入历史
        if !pending.query.name.is_empty() {
            self.history.insert(
                0,
                HistoryEntry {
                    name: pending.query.name.clone(),
                    label: JUST_NOW.to_string(),
                    at: Local::now(),
                },
            );
            self.history.truncate(HISTORY_CAP);
        }
        self.result = Some(profile);
        self.status = SearchStatus::Resolved;
    }

    /// 当前历史记录，最近在前
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SearchSession {
        SearchSession::new(Box::new(FixtureLookup::new(Fixtures::default())))
    }

    fn query(name: &str, country: &str, phone: &str) -> SearchQuery {
        SearchQuery {
            name: name.to_string(),
            country: country.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_submit_enters_pending() {
        let mut s = session();
        assert_eq!(s.status, SearchStatus::Idle);

        let t0 = Instant::now();
        s.submit(query("Анна Орлова", "", ""), t0);
        assert_eq!(s.status, SearchStatus::Pending);
        assert!(s.result.is_none());
    }

    #[test]
    fn test_resolves_only_after_latency() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(query("Анна Орлова", "", ""), t0);

        s.tick(t0 + Duration::from_millis(1000));
        assert_eq!(s.status, SearchStatus::Pending);

        s.tick(t0 + SEARCH_LATENCY);
        assert_eq!(s.status, SearchStatus::Resolved);
        assert_eq!(s.result.as_ref().unwrap().name, "Анна Орлова");
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].name, "Анна Орлова");
        assert_eq!(s.history()[0].label, JUST_NOW);
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(query("Анна Орлова", "", ""), t0);
        s.tick(t0 + SEARCH_LATENCY);

        let profile = s.result.unwrap();
        assert_eq!(profile.name, "Анна Орлова");
        assert_eq!(profile.country, "Россия");
        assert_eq!(profile.phone, "+7 (999) 123-45-67");
    }

    #[test]
    fn test_empty_query_accepted_not_an_error() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(SearchQuery::default(), t0);
        s.tick(t0 + SEARCH_LATENCY);

        assert_eq!(s.status, SearchStatus::Resolved);
        let profile = s.result.as_ref().unwrap();
        assert_eq!(profile.name, "Иван Смирнов");
        // 空姓名不进历史
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_history_capped_most_recent_first() {
        let mut s = session();
        let mut t = Instant::now();
        for i in 0..7 {
            s.submit(query(&format!("Гость {i}"), "", ""), t);
            t += SEARCH_LATENCY;
            s.tick(t);
        }

        assert_eq!(s.history().len(), HISTORY_CAP);
        assert_eq!(s.history()[0].name, "Гость 6");
        assert_eq!(s.history()[4].name, "Гость 2");
    }

    #[test]
    fn test_history_order_preserved_between_insertions() {
        let mut s = session();
        let mut t = Instant::now();
        for name in ["Первый", "Второй", "Третий"] {
            s.submit(query(name, "", ""), t);
            t += SEARCH_LATENCY;
            s.tick(t);
        }
        let names: Vec<&str> = s.history().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Третий", "Второй", "Первый"]);
    }

    #[test]
    fn test_resubmit_supersedes_pending() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(query("Анна Орлова", "", ""), t0);
        s.submit(query("Пётр Волков", "", ""), t0 + Duration::from_millis(500));

        // 第一个查询的截止时间已过，但它已被取代
        s.tick(t0 + SEARCH_LATENCY);
        assert_eq!(s.status, SearchStatus::Pending);
        assert!(s.result.is_none());

        s.tick(t0 + Duration::from_millis(500) + SEARCH_LATENCY);
        assert_eq!(s.status, SearchStatus::Resolved);
        assert_eq!(s.result.as_ref().unwrap().name, "Пётр Волков");
        // 被取代的查询不留痕迹
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].name, "Пётр Волков");
    }

    #[test]
    fn test_no_return_to_idle_after_first_search() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(query("Анна Орлова", "", ""), t0);
        s.tick(t0 + SEARCH_LATENCY);
        assert_eq!(s.status, SearchStatus::Resolved);

        s.submit(query("Пётр Волков", "", ""), t0 + SEARCH_LATENCY);
        assert_eq!(s.status, SearchStatus::Pending);
        s.tick(t0 + SEARCH_LATENCY * 2);
        assert_eq!(s.status, SearchStatus::Resolved);
    }
}
