use crate::component::ComponentName;
use anyhow::Result;

/// Opaque handle to the client's display endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u64);

/// Descriptor for a client asking to receive transport-control updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayClient {
    pub handle: DisplayHandle,
    pub artwork_width: u32,
    pub artwork_height: u32,
    /// Component receiving update callbacks, `None` when the client did not
    /// declare one. Also the allowlist matching key.
    pub listener: Option<ComponentName>,
}

impl DisplayClient {
    pub fn new(
        handle: DisplayHandle,
        artwork_width: u32,
        artwork_height: u32,
        listener: Option<ComponentName>,
    ) -> Self {
        Self {
            handle,
            artwork_width,
            artwork_height,
            listener,
        }
    }
}

/// Bookkeeping of active display clients. The gate only fronts it; the
/// registry may become unreachable at any time.
pub trait DisplayRegistry: Send + Sync {
    fn register_display(&self, client: &DisplayClient) -> Result<()>;
}
