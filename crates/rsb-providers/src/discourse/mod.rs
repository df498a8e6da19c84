//! Discourse Provider
//!
//! Implements the host directory port against the Discourse REST API.
//!
//! | Lookup | Endpoint |
//! |--------|----------|
//! | Group by name | `GET /groups/{name}.json` |
//! | Group members | `GET /groups/{name}/members.json?offset&limit` |
//! | Profile image | `GET /u/{username}.json` (`avatar_template`) |

mod directory;
mod types;

pub use directory::{DiscourseConfig, DiscourseDirectory};
