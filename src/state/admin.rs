//! User-management state for the admin panel.
//!
//! DESIGN
//! ======
//! The page performs the network calls; this module only folds their results
//! into the table and builds the payloads, so every edit path is testable
//! without a browser.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::collections::BTreeSet;

use crate::net::types::{ADMIN_ROLE, AdminUser, USER_ROLE, UserDraft};

/// Severity of a transient admin notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown after an admin action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Which record the edit dialog targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(i64),
}

/// Add/edit dialog fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl UserForm {
    #[must_use]
    pub fn from_user(user: &AdminUser) -> Self {
        Self { username: user.username.clone(), email: user.email.clone(), is_admin: user.is_admin() }
    }

    /// Both text fields are required.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("Username is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        Ok(())
    }

    /// Payload for this form. Admins also keep the base user role; an edited
    /// account keeps its active flag.
    #[must_use]
    pub fn to_draft(&self, existing: Option<&AdminUser>) -> UserDraft {
        UserDraft {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            roles: roles_for(self.is_admin),
            active: existing.is_none_or(|u| u.active),
        }
    }
}

/// Role set granted by the admin checkbox.
#[must_use]
pub fn roles_for(is_admin: bool) -> BTreeSet<String> {
    let mut roles = BTreeSet::from([USER_ROLE.to_owned()]);
    if is_admin {
        roles.insert(ADMIN_ROLE.to_owned());
    }
    roles
}

/// Draft that flips `user`'s active flag.
#[must_use]
pub fn toggled_active(user: &AdminUser) -> UserDraft {
    UserDraft {
        username: user.username.clone(),
        email: user.email.clone(),
        roles: user.roles.clone(),
        active: !user.active,
    }
}

/// Admin table contents plus load/notice status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminState {
    pub users: Vec<AdminUser>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    /// Id of the latest notice; bumped on every `notify`.
    pub notice_id: u64,
}

impl AdminState {
    /// Replace the table after a successful load.
    pub fn loaded(&mut self, users: Vec<AdminUser>) {
        self.users = users;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed load.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Show `notice` and return its id.
    pub fn notify(&mut self, notice: Notice) -> u64 {
        self.notice_id += 1;
        self.notice = Some(notice);
        self.notice_id
    }

    /// Id of the notice on screen, if any.
    #[must_use]
    pub fn shown_notice(&self) -> Option<u64> {
        self.notice.as_ref().map(|_| self.notice_id)
    }

    /// Clear the notice only while it is still the one tagged `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.shown_notice() != Some(id) {
            return false;
        }
        self.notice = None;
        true
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insert or replace by id, keeping table order for existing rows.
    pub fn upsert(&mut self, user: AdminUser) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user,
            None => self.users.push(user),
        }
    }

    /// Remove by id; returns whether a row was dropped.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}
