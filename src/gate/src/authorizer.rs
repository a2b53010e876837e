use std::sync::Arc;

use log::{debug, error, warn};
use rcgate_common::ext::ResultExt;
use scopeguard::defer;

use crate::component::ComponentName;
use crate::identity::{CallerIdentity, CallingContext};
use crate::permission::{MEDIA_CONTENT_CONTROL, PermissionChecker};
use crate::registry::{DisplayClient, DisplayRegistry};
use crate::settings::{self, ENABLED_NOTIFICATION_LISTENERS, SettingsStore};

/// Outcome of a single authorization attempt. Produced fresh per call and
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationResult {
    Denied,
    GrantedByPermission,
    GrantedByAllowlist,
}

impl AuthorizationResult {
    pub fn is_granted(self) -> bool {
        !matches!(self, AuthorizationResult::Denied)
    }
}

/// Gate in front of the display registry.
///
/// All collaborators are injected at construction; the gate keeps no
/// process-global state and no record of prior grants.
pub struct RegistrationAuthorizer {
    permissions: Arc<dyn PermissionChecker>,
    settings: Arc<dyn SettingsStore>,
    context: Arc<dyn CallingContext>,
    registry: Arc<dyn DisplayRegistry>,
}

impl RegistrationAuthorizer {
    pub fn new(
        permissions: Arc<dyn PermissionChecker>,
        settings: Arc<dyn SettingsStore>,
        context: Arc<dyn CallingContext>,
        registry: Arc<dyn DisplayRegistry>,
    ) -> Self {
        Self {
            permissions,
            settings,
            context,
            registry,
        }
    }

    /// Decide whether `caller` may register a display client delivering
    /// callbacks to `listener`.
    ///
    /// The permission check comes first and needs no listener; the allowlist
    /// is only consulted for callers without the permission.
    pub fn authorize(
        &self,
        caller: &CallerIdentity,
        listener: Option<&ComponentName>,
    ) -> AuthorizationResult {
        if self
            .permissions
            .check_calling_permission(caller, MEDIA_CONTENT_CONTROL)
        {
            return AuthorizationResult::GrantedByPermission;
        }

        if let Some(listener) = listener
            && self.listener_enabled_for_current_user(listener)
        {
            return AuthorizationResult::GrantedByAllowlist;
        }

        AuthorizationResult::Denied
    }

    /// The caller cannot read another user's secure settings, so the lookup
    /// runs with the calling identity cleared. The identity is restored on
    /// every exit path, including settings failures.
    fn listener_enabled_for_current_user(&self, listener: &ComponentName) -> bool {
        let token = self.context.clear_calling_identity();
        defer! {
            self.context.restore_calling_identity(token);
        }

        let user = self.context.current_user();
        let Some(allowlist) = self
            .settings
            .get_string_for_user(ENABLED_NOTIFICATION_LISTENERS, user)
            .ok_or_warn("failed to read enabled listeners")
            .flatten()
        else {
            return false;
        };

        settings::parse_listener_allowlist(&allowlist)
            .iter()
            .any(|component| component == listener)
    }

    /// Register `client` with the display registry if the caller is
    /// authorized. Best-effort: every failure is logged and reported as
    /// `false`, nothing propagates to the caller.
    pub fn register_remote_display(
        &self,
        caller: &CallerIdentity,
        client: Option<&DisplayClient>,
    ) -> bool {
        let Some(client) = client else {
            return false;
        };

        let result = self.authorize(caller, client.listener.as_ref());
        if !result.is_granted() {
            warn!(
                "access denied to process {}: must hold {MEDIA_CONTENT_CONTROL} \
                 or be an enabled notification listener",
                caller.pid
            );
            return false;
        }

        debug!("registering display {:?} ({result:?})", client.handle);

        match self.registry.register_display(client) {
            Ok(()) => true,
            Err(err) => {
                error!("display registry unreachable: {err:?}");
                false
            }
        }
    }
}
