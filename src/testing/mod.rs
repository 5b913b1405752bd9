//! In-memory gateway for unit tests

use std::cell::{Cell, RefCell};

use crate::error::{NukeError, Result};
use crate::gh::{GatewayFailure, RemoteGateway, RepoRef};

pub struct FakeGateway {
    login: Option<String>,
    owned: Vec<String>,
    missing: Vec<String>,
    failing_deletes: Vec<String>,
    authenticated: bool,
    pub deleted: RefCell<Vec<RepoRef>>,
    pub view_calls: Cell<usize>,
}

impl FakeGateway {
    pub fn new(login: &str, owned: &[&str]) -> Self {
        Self {
            login: Some(login.to_string()).filter(|l| !l.is_empty()),
            owned: owned.iter().map(|s| s.to_string()).collect(),
            missing: Vec::new(),
            failing_deletes: Vec::new(),
            authenticated: true,
            deleted: RefCell::new(Vec::new()),
            view_calls: Cell::new(0),
        }
    }

    pub fn with_missing(mut self, names: &[&str]) -> Self {
        self.missing = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_failing_deletes(mut self, names: &[&str]) -> Self {
        self.failing_deletes = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn logged_out(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn deleted_names(&self) -> Vec<String> {
        self.deleted.borrow().iter().map(|r| r.name.clone()).collect()
    }
}

impl RemoteGateway for FakeGateway {
    fn check_installed(&self) -> Result<()> {
        Ok(())
    }

    fn check_authenticated(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(NukeError::NotAuthenticated)
        }
    }

    fn ensure_delete_scope(&self) -> Result<()> {
        Ok(())
    }

    fn resolve_username(&self) -> Option<String> {
        self.login.clone()
    }

    fn list_repositories(&self, _username: &str) -> Vec<String> {
        self.owned.clone()
    }

    fn view_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure> {
        self.view_calls.set(self.view_calls.get() + 1);
        if self.missing.contains(&repo.name) {
            Err(GatewayFailure::NotFound)
        } else {
            Ok(())
        }
    }

    fn delete_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure> {
        if self.failing_deletes.contains(&repo.name) {
            return Err(GatewayFailure::Auth);
        }
        self.deleted.borrow_mut().push(repo.clone());
        Ok(())
    }
}
