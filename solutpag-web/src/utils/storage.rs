//! Browser storage for the login screen's remember-me preference.
//!
//! Storage can be unavailable (private mode, disabled cookies); every helper degrades to a
//! no-op and logs at `debug`.

use web_sys::Storage;

use super::constants::{DEMO_TOKEN, REMEMBER_KEY, TOKEN_KEY};

fn local() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn session() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Saved remember-me preference; `false` when storage is unavailable.
pub fn load_remember() -> bool {
    local()
        .and_then(|storage| storage.get_item(REMEMBER_KEY).ok().flatten())
        .is_some_and(|value| value == "1")
}

/// Persist the preference and park the session token where it belongs: `localStorage` for
/// remembered sessions, `sessionStorage` otherwise. The other store is cleared.
pub fn persist_session(remember: bool) {
    let (Some(local), Some(session)) = (local(), session()) else {
        log::debug!("[STORAGE] browser storage unavailable, session not persisted");
        return;
    };

    let result = if remember {
        local
            .set_item(REMEMBER_KEY, "1")
            .and_then(|_| local.set_item(TOKEN_KEY, DEMO_TOKEN))
            .and_then(|_| session.remove_item(TOKEN_KEY))
    } else {
        local
            .remove_item(REMEMBER_KEY)
            .and_then(|_| session.set_item(TOKEN_KEY, DEMO_TOKEN))
            .and_then(|_| local.remove_item(TOKEN_KEY))
    };

    if let Err(e) = result {
        log::debug!("[STORAGE] failed to persist session: {:?}", e);
    }
}
