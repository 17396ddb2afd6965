//! In-memory user accounts.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::domain::user::{NewUser, UserAccount};
use crate::ports::{PasswordHasher, UserRepository};

/// A demo account seeded at startup: username, password, role, email, full name.
pub struct DemoUser {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub email: &'static str,
    pub full_name: &'static str,
}

/// Accounts available out of the box when demo seeding is enabled.
pub const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        username: "testuser",
        password: "password123",
        role: Role::User,
        email: "testuser@example.com",
        full_name: "测试用户",
    },
    DemoUser {
        username: "developer",
        password: "dev123456",
        role: Role::Developer,
        email: "dev@example.com",
        full_name: "开发者",
    },
    DemoUser {
        username: "adminuser",
        password: "adminpass123",
        role: Role::Admin,
        email: "admin@example.com",
        full_name: "管理员",
    },
];

/// Account store. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<Vec<UserAccount>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding [`DEMO_USERS`], passwords digested by `hasher`.
    pub fn with_demo_users(hasher: &dyn PasswordHasher) -> Result<Self, AuthError> {
        let now = Timestamp::now();
        let accounts = DEMO_USERS
            .iter()
            .enumerate()
            .map(|(i, demo)| {
                Ok(UserAccount {
                    id: UserId::new(i as u64 + 1),
                    username: demo.username.to_string(),
                    email: Some(demo.email.to_string()),
                    full_name: Some(demo.full_name.to_string()),
                    password_hash: hasher.hash(demo.password)?,
                    role: demo.role,
                    is_active: true,
                    created_at: now,
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;

        Ok(Self {
            accounts: RwLock::new(accounts),
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserAccount, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.username == user.username) {
            return Err(DomainError::new(
                ErrorCode::UsernameTaken,
                format!("Username '{}' is already registered", user.username),
            ));
        }

        let next_id = accounts.iter().map(|a| a.id.value()).max().unwrap_or(0) + 1;
        let account = UserAccount {
            id: UserId::new(next_id),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            password_hash: user.password_hash,
            role: user.role,
            is_active: true,
            created_at: Timestamp::now(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}
