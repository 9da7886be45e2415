//! Granted/denied signal for notification delivery.
//!
//! A terminal host needs no runtime consent dialog; the signal comes from
//! the settings flag, overridable through `APPGLANCE_NOTIFICATIONS` for
//! scripting. Denied is a degraded mode, not an error: runs still execute
//! to completion, the presenter just stops emitting.

use super::settings::AppSettings;

pub const ENV_OVERRIDE: &str = "APPGLANCE_NOTIFICATIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

pub fn check(settings: &AppSettings) -> PermissionState {
    let override_value = std::env::var(ENV_OVERRIDE).ok();
    resolve(override_value.as_deref(), settings.notifications_enabled)
}

fn resolve(override_value: Option<&str>, enabled: bool) -> PermissionState {
    let granted = match override_value {
        Some(value) => !matches!(value.trim(), "0" | "false" | "off" | "denied"),
        None => enabled,
    };
    if granted {
        PermissionState::Granted
    } else {
        PermissionState::Denied
    }
}
