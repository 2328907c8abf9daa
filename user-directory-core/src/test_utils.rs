//! 测试辅助模块
//!
//! 提供 mock 数据源和用户记录工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use user_directory_provider::{
    Address, Company, Geo, ProviderError, Result, UserRecord, UserSource,
};

// ===== MockUserSource =====

pub struct MockUserSource {
    users: Vec<UserRecord>,
    /// 如果 Some，fetch_users 返回此错误
    directory_error: Option<ProviderError>,
    /// 如果 Some，fetch_user 返回此错误
    detail_error: Option<ProviderError>,
    directory_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl MockUserSource {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            directory_error: None,
            detail_error: None,
            directory_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_directory(mut self, error: ProviderError) -> Self {
        self.directory_error = Some(error);
        self
    }

    pub fn failing_detail(mut self, error: ProviderError) -> Self {
        self.detail_error = Some(error);
        self
    }

    pub fn directory_calls(&self) -> usize {
        self.directory_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for MockUserSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.directory_calls.fetch_add(1, Ordering::SeqCst);
        match &self.directory_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.users.clone()),
        }
    }

    async fn fetch_user(&self, user_id: &str) -> Result<UserRecord> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.detail_error {
            return Err(e.clone());
        }
        self.users
            .iter()
            .find(|u| u.id.to_string() == user_id)
            .cloned()
            .ok_or_else(|| ProviderError::UserNotFound {
                provider: "mock".into(),
                user_id: user_id.to_string(),
                status: Some(404),
            })
    }
}

// ===== 用户工厂 =====

/// 只含列表字段的用户
pub fn user(id: u64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        username: format!("user{id}"),
        email: email.to_string(),
        phone: format!("555-010{id}"),
        website: String::new(),
        address: Address::default(),
        company: Company {
            name: format!("Company {id}"),
            ..Company::default()
        },
    }
}

/// `User 1 <user1@example.com>` … `User n <usern@example.com>`
pub fn numbered_users(n: u64) -> Vec<UserRecord> {
    (1..=n)
        .map(|i| user(i, &format!("User {i}"), &format!("user{i}@example.com")))
        .collect()
}

/// 字段齐全的用户
pub fn detailed_user() -> UserRecord {
    UserRecord {
        id: 1,
        name: "Leanne Graham".into(),
        username: "Bret".into(),
        email: "Sincere@april.biz".into(),
        phone: "1-770-736-8031 x56442".into(),
        website: "hildegard.org".into(),
        address: Address {
            street: "Kulas Light".into(),
            suite: "Apt. 556".into(),
            city: "Gwenborough".into(),
            zipcode: "92998-3874".into(),
            geo: Geo {
                lat: "-37.3159".into(),
                lng: "81.1496".into(),
            },
        },
        company: Company {
            name: "Romaguera-Crona".into(),
            catch_phrase: "Multi-layered client-server neural-net".into(),
            bs: "harness real-time e-markets".into(),
        },
    }
}
