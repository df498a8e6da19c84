//! Port Traits
//!
//! Contracts the use cases depend on. Providers implement the remote and host
//! ports; infrastructure implements settings and queue ports.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`RemoteGroupClient`] | Messaging service HTTP adapter |
//! | [`RemoteClientFactory`] | Builds a client from a settings snapshot |
//! | [`HostDirectory`] | Host platform adapter |
//! | [`SettingsSource`] | Live settings store |
//! | [`JobQueue`] | Background work queue |

pub mod host;
pub mod queue;
pub mod remote;
pub mod settings;

pub use host::{HostDirectory, SharedHostDirectory};
pub use queue::{JobQueue, SharedJobQueue};
pub use remote::{
    RemoteClientFactory, RemoteGroupClient, SharedRemoteClient, SharedRemoteClientFactory,
};
pub use settings::{SettingsSource, SharedSettingsSource};
