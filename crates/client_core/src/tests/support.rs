use std::{collections::HashSet, sync::Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{
    domain::{UserId, UserRecord},
    protocol::{NewUser, UserUpdate},
};

use crate::directory::UserDirectory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Create(NewUser),
    List,
    Update(UserId, UserUpdate),
    Delete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Endpoint {
    Create,
    List,
    Update,
    Delete,
}

/// In-memory stand-in for the users service that records every call.
#[derive(Default)]
pub(crate) struct FakeDirectory {
    calls: Mutex<Vec<Call>>,
    users: Mutex<Vec<UserRecord>>,
    failing: Mutex<HashSet<Endpoint>>,
}

impl FakeDirectory {
    pub(crate) fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub(crate) fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().expect("failing").insert(endpoint);
    }

    pub(crate) fn recover(&self, endpoint: Endpoint) {
        self.failing.lock().expect("failing").remove(&endpoint);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls").clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.calls().iter().filter(|call| **call == Call::List).count()
    }

    fn record(&self, call: Call, endpoint: Endpoint) -> Result<()> {
        self.calls.lock().expect("calls").push(call);
        if self.failing.lock().expect("failing").contains(&endpoint) {
            return Err(anyhow!("connection refused by fake {endpoint:?} endpoint"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn create_user(&self, user: &NewUser) -> Result<()> {
        self.record(Call::Create(user.clone()), Endpoint::Create)?;
        let mut users = self.users.lock().expect("users");
        let next_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        users.push(UserRecord::new(
            UserId(next_id),
            user.name.clone(),
            user.surname.clone(),
            user.age,
        ));
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.record(Call::List, Endpoint::List)?;
        Ok(self.users.lock().expect("users").clone())
    }

    async fn update_user(&self, id: UserId, update: &UserUpdate) -> Result<()> {
        self.record(Call::Update(id, update.clone()), Endpoint::Update)?;
        let mut users = self.users.lock().expect("users");
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| anyhow!("404 Not Found: user {id}"))?;
        user.name = update.name.clone();
        user.surname = update.surname.clone();
        user.age = update.age;
        Ok(())
    }

    async fn delete_user(&self, raw_id: &str) -> Result<()> {
        self.record(Call::Delete(raw_id.to_string()), Endpoint::Delete)?;
        let id: i64 = raw_id
            .parse()
            .map_err(|_| anyhow!("404 Not Found: /users/{raw_id}"))?;
        self.users.lock().expect("users").retain(|u| u.id.0 != id);
        Ok(())
    }
}
