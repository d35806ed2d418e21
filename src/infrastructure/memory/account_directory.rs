//! In-Memory Account Directory

use std::collections::HashMap;

use crate::application::ports::{AccountDirectoryPort, UserAccount};
use crate::config::UserAccountConfig;

/// 由配置加载的账户目录
pub struct InMemoryAccountDirectory {
    accounts: HashMap<String, UserAccount>,
}

impl InMemoryAccountDirectory {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.username.clone(), account))
                .collect(),
        }
    }

    pub fn from_config(users: &[UserAccountConfig]) -> Self {
        Self::new(
            users
                .iter()
                .map(|u| UserAccount {
                    id: u.id,
                    username: u.username.clone(),
                    password: u.password.clone(),
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountDirectoryPort for InMemoryAccountDirectory {
    fn find_by_username(&self, username: &str) -> Option<UserAccount> {
        self.accounts.get(username).cloned()
    }
}
