use crate::component::ComponentName;
use crate::identity::UserId;
use anyhow::Result;

/// Secure setting holding the colon-delimited list of notification listener
/// components the user has enabled. Owned and mutated by the platform.
pub const ENABLED_NOTIFICATION_LISTENERS: &str = "enabled_notification_listeners";

/// Per-user settings storage owned by the platform.
pub trait SettingsStore: Send + Sync {
    /// Read a string setting for the given user, `Ok(None)` when unset.
    fn get_string_for_user(&self, name: &str, user: UserId) -> Result<Option<String>>;
}

/// Split an allowlist value into component names. Malformed entries are
/// dropped, they never abort evaluation of the rest.
pub fn parse_listener_allowlist(value: &str) -> Vec<ComponentName> {
    value
        .split(':')
        .filter(|entry| !entry.is_empty())
        .filter_map(ComponentName::unflatten)
        .collect()
}
