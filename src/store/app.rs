//! Process-wide request status and last error, observed by the UI for spinners and toasts.

use serde::{Deserialize, Serialize};

use super::actions::Action;

/// Progress of a request, globally or for a single record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Apply `action` to the global status slice. Returns `true` if the slice changed.
pub fn reduce(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::SetAppStatus(status) => replace(&mut state.status, *status),
        Action::SetAppError(error) => replace(&mut state.error, error.clone()),
        _ => false,
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
