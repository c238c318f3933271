//! Bridge to the external identity provider.
//!
//! The provider owns sign-in and sessions. This crate only reads the session
//! record it leaves behind and decides which account affordance the page
//! shell shows.

use serde::{Deserialize, Serialize};

pub const PAGE_TITLE: &str = "DefiSight";

/// `localStorage` key under which the provider keeps the signed-in user.
pub const SESSION_KEY: &str = "ds_session";

pub const DEFAULT_SIGN_IN_URL: &str = "/sign-in";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl SessionUser {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.id.as_str())
    }
}

/// Parse the provider's raw session record. Anything unusable means "no user".
pub fn parse_session(raw: Option<&str>) -> Option<SessionUser> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let user: SessionUser = serde_json::from_str(raw).ok()?;
    if user.id.trim().is_empty() {
        return None;
    }
    Some(user)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceTheme {
    Light,
    Dark,
}

impl AppearanceTheme {
    pub fn css_class(self) -> &'static str {
        match self {
            AppearanceTheme::Light => "theme-light",
            AppearanceTheme::Dark => "theme-dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAffordance {
    SignIn {
        url: String,
    },
    Account {
        label: String,
        image_url: Option<String>,
        theme: AppearanceTheme,
    },
}

/// What the page shell renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPlan {
    pub title: &'static str,
    pub account: AccountAffordance,
    /// Always true: the wallet form is not gated by sign-in.
    pub mount_wallet_form: bool,
}

pub fn shell_plan(user: Option<&SessionUser>, sign_in_url: &str) -> ShellPlan {
    let account = match user {
        None => AccountAffordance::SignIn {
            url: sign_in_url.to_owned(),
        },
        Some(user) => AccountAffordance::Account {
            label: user.label().to_owned(),
            image_url: user.image_url.clone(),
            theme: AppearanceTheme::Dark,
        },
    };

    ShellPlan {
        title: PAGE_TITLE,
        account,
        mount_wallet_form: true,
    }
}
