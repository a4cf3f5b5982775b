use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 搜索查询，三个字段都允许为空
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub name: String,
    pub country: String,
    pub phone: String,
}

/// 社交网络账号（稀疏映射，每项可缺省）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialHandles {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// 查询结果档案
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub country: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub social: SocialHandles,
    pub occupation: String,
    pub education: String,
    pub relatives: Vec<String>,
}

/// 排行榜条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub amount: u64,
    pub avatar: String,
}

/// 搜索历史条目（最近在前）
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub label: String,
    pub at: DateTime<Local>,
}

/// 空字段的回退值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFallbacks {
    pub name: String,
    pub country: String,
    pub phone: String,
}

impl Default for QueryFallbacks {
    fn default() -> Self {
        Self {
            name: "Иван Смирнов".to_string(),
            country: "Россия".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
        }
    }
}

/// 档案的固定字段，与提交的查询无关
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    pub age: u32,
    pub city: String,
    pub email: String,
    #[serde(default)]
    pub social: SocialHandles,
    pub occupation: String,
    pub education: String,
    #[serde(default)]
    pub relatives: Vec<String>,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            age: 34,
            city: "Москва".to_string(),
            email: "ivan.smirnov@example.ru".to_string(),
            social: SocialHandles {
                facebook: None,
                instagram: Some("@ivan_smirnov".to_string()),
                linkedin: Some("ivan-smirnov".to_string()),
                twitter: None,
            },
            occupation: "Инженер-строитель".to_string(),
            education: "МГСУ, факультет ПГС".to_string(),
            relatives: vec![
                "Мария Смирнова (жена)".to_string(),
                "Олег Смирнов (брат)".to_string(),
            ],
        }
    }
}

impl ProfileDefaults {
    /// 用给定的姓名/国家/电话和固定字段组装档案
    pub fn materialize(&self, name: String, country: String, phone: String) -> Profile {
        Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            age: self.age,
            country,
            city: self.city.clone(),
            phone,
            email: self.email.clone(),
            social: self.social.clone(),
            occupation: self.occupation.clone(),
            education: self.education.clone(),
            relatives: self.relatives.clone(),
        }
    }
}

/// 展示夹具（可由 fixtures.toml 覆盖）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default = "default_leaderboard")]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub fallbacks: QueryFallbacks,
    #[serde(default)]
    pub profile: ProfileDefaults,
    #[serde(default = "default_referral_earnings")]
    pub referral_earnings: f64,
    #[serde(default = "default_invited_friends")]
    pub invited_friends: u32,
}

fn default_referral_earnings() -> f64 {
    142.50
}

fn default_invited_friends() -> u32 {
    3
}

fn default_leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |name: &str, amount: u64, avatar: &str| LeaderboardEntry {
        name: name.to_string(),
        amount,
        avatar: avatar.to_string(),
    };
    vec![
        entry("Александр К.", 15420, "АК"),
        entry("Мария В.", 12850, "МВ"),
        entry("Дмитрий П.", 11200, "ДП"),
        entry("Елена С.", 9870, "ЕС"),
        entry("Игорь Т.", 8650, "ИТ"),
    ]
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            leaderboard: default_leaderboard(),
            fallbacks: QueryFallbacks::default(),
            profile: ProfileDefaults::default(),
            referral_earnings: default_referral_earnings(),
            invited_friends: default_invited_friends(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixtures() {
        let fixtures = Fixtures::default();
        assert_eq!(fixtures.leaderboard.len(), 5);
        assert_eq!(fixtures.leaderboard[0].name, "Александр К.");
        assert_eq!(fixtures.referral_earnings, 142.50);
        assert_eq!(fixtures.invited_friends, 3);
    }

    #[test]
    fn test_materialize_keeps_canned_fields() {
        let defaults = ProfileDefaults::default();
        let profile = defaults.materialize(
            "Анна Орлова".to_string(),
            "Россия".to_string(),
            "+7 (900) 000-00-00".to_string(),
        );
        assert_eq!(profile.name, "Анна Орлова");
        assert_eq!(profile.age, defaults.age);
        assert_eq!(profile.city, defaults.city);
        assert_eq!(profile.relatives.len(), 2);
        assert!(profile.social.instagram.is_some());
        assert!(profile.social.facebook.is_none());
    }

    #[test]
    fn test_fixtures_toml_partial_override() {
        let fixtures: Fixtures = toml::from_str("referral_earnings = 50.0").unwrap();
        assert_eq!(fixtures.referral_earnings, 50.0);
        // 未覆盖的部分保持内置默认值
        assert_eq!(fixtures.leaderboard.len(), 5);
        assert_eq!(fixtures.fallbacks.name, "Иван Смирнов");
    }
}
