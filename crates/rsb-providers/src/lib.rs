//! # Providers
//!
//! HTTP adapters implementing the domain ports.
//!
//! | Provider | Port | Service |
//! |----------|------|---------|
//! | [`ApplozicClient`] | `RemoteGroupClient` | Applozic group REST API |
//! | [`ApplozicClientFactory`] | `RemoteClientFactory` | Builds clients per settings snapshot |
//! | [`DiscourseDirectory`] | `HostDirectory` | Discourse groups and users API |

pub mod applozic;
pub mod constants;
pub mod discourse;
pub mod http;
pub mod utils;

pub use applozic::{ApplozicClient, ApplozicClientFactory};
pub use discourse::{DiscourseConfig, DiscourseDirectory};
pub use http::HttpClientConfig;
