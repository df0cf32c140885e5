use log::info;

use crate::session::{FlagStorage, SessionStore};

/// Two-state login gate. Each transition writes through to the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    LoggedOut,
    LoggedIn,
}

impl GateState {
    /// One-time read at mount.
    pub fn restore<S: FlagStorage>(store: &SessionStore<S>) -> Self {
        if store.is_authenticated() {
            info!("restored previous session");
            GateState::LoggedIn
        } else {
            GateState::LoggedOut
        }
    }

    pub fn login<S: FlagStorage>(self, store: &SessionStore<S>) -> Self {
        store.set_authenticated(true);
        if self == GateState::LoggedOut {
            info!("gate: logged out -> logged in");
        }
        GateState::LoggedIn
    }

    pub fn logout<S: FlagStorage>(self, store: &SessionStore<S>) -> Self {
        store.clear();
        if self == GateState::LoggedIn {
            info!("gate: logged in -> logged out");
        }
        GateState::LoggedOut
    }
}
