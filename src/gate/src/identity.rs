/// User id in the platform's multi-user model.
pub type UserId = u32;

/// Opaque token returned by [`CallingContext::clear_calling_identity`];
/// required to restore the original identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityToken(pub u64);

/// Identity of the process attempting a registration. Consulted for
/// permission evaluation and denial logging only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub pid: u32,
    pub user_id: UserId,
    /// Opaque security principal, interpreted by the permission checker.
    pub principal: Vec<u8>,
}

/// Execution context of the thread handling a registration call.
///
/// Clearing the calling identity lets the gate read settings the caller
/// itself may not; the returned token must be handed back to
/// `restore_calling_identity` on every exit path.
pub trait CallingContext: Send + Sync {
    fn clear_calling_identity(&self) -> IdentityToken;
    fn restore_calling_identity(&self, token: IdentityToken);

    /// The foreground user whose settings apply to allowlist lookups.
    fn current_user(&self) -> UserId;
}
