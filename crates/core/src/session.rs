//! Client-side session context.
//!
//! Holds the signed-in user for a client and lets any number of observers
//! react to sign-in and sign-out through a `tokio::sync::watch` channel.
//! The context is an ordinary value passed to whoever needs it; there is no
//! global current-user state.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::types::DbId;

/// The user a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Bearer token presented on authenticated requests, if one was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Current-user context with change notification.
#[derive(Debug)]
pub struct SessionContext {
    sender: watch::Sender<Option<SessionUser>>,
}

impl SessionContext {
    /// Create a signed-out context.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Record a successful login or registration and notify subscribers.
    pub fn sign_in(&self, user: SessionUser) {
        self.sender.send_replace(Some(user));
    }

    /// Clear the current user. Subscribers are only notified if a user was
    /// actually signed in.
    pub fn sign_out(&self) {
        self.sender.send_if_modified(|current| current.take().is_some());
    }

    /// Snapshot of the current user.
    pub fn current(&self) -> Option<SessionUser> {
        self.sender.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Bearer token of the current user, if any.
    pub fn access_token(&self) -> Option<String> {
        self.sender
            .borrow()
            .as_ref()
            .and_then(|u| u.access_token.clone())
    }

    /// Observe session changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.sender.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
