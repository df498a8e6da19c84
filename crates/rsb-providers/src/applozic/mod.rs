//! Applozic Provider
//!
//! Implements the remote group port against the Applozic group REST API.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | Fetch members | `GET /rest/ws/group/v2/info?clientGroupId={id}` |
//! | Add members | `POST /rest/ws/group/add/users?createNew=true` |
//! | Remove members | `POST /rest/ws/group/remove/users` |
//! | Update avatar | `POST /rest/ws/user/update` with `Of-User-Id` |

mod client;
mod factory;
mod types;

pub use client::ApplozicClient;
pub use factory::ApplozicClientFactory;
