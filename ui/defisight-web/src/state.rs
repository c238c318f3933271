//! Page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The wallet form lives here for as long as the page is mounted.

use ds_auth_adapter::{SESSION_KEY, SessionUser, parse_session};
use ds_wallet_form::WalletForm;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;

thread_local! {
    static FORM: RefCell<WalletForm> = RefCell::new(WalletForm::new());
}

/// Run a closure with shared read access to the form.
pub fn with_form<F, R>(f: F) -> R
where
    F: FnOnce(&WalletForm) -> R,
{
    FORM.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the form.
pub fn with_form_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut WalletForm) -> R,
{
    FORM.with(|s| f(&mut s.borrow_mut()))
}

// ── Identity provider session ──

pub fn session_user() -> Option<SessionUser> {
    let raw = LocalStorage::raw().get_item(SESSION_KEY).ok().flatten();
    parse_session(raw.as_deref())
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}
