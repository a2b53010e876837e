//! Authorization gate for registering remote-control display clients.
//!
//! A display client may register with the media-broadcast source either by
//! holding the content-control permission or by being one of the user's
//! enabled notification listeners. The gate decides, then forwards granted
//! registrations to the display registry. All platform collaborators are
//! injected at construction.

pub mod authorizer;
pub mod component;
pub mod identity;
pub mod permission;
pub mod registry;
pub mod settings;

pub use authorizer::{AuthorizationResult, RegistrationAuthorizer};
pub use component::ComponentName;
pub use identity::{CallerIdentity, CallingContext, IdentityToken, UserId};
pub use permission::{MEDIA_CONTENT_CONTROL, PermissionChecker};
pub use registry::{DisplayClient, DisplayHandle, DisplayRegistry};
pub use settings::{ENABLED_NOTIFICATION_LISTENERS, SettingsStore};
