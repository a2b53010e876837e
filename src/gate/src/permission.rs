use crate::identity::CallerIdentity;

/// Permission that authorizes media transport control on its own, without an
/// allowlist lookup.
pub const MEDIA_CONTENT_CONTROL: &str = "android.permission.MEDIA_CONTENT_CONTROL";

/// Seam to the platform security manager.
pub trait PermissionChecker: Send + Sync {
    /// Whether the calling principal holds `permission`.
    fn check_calling_permission(&self, caller: &CallerIdentity, permission: &str) -> bool;
}
