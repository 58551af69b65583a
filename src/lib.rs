//! # finnews_bootstrap
//!
//! Page-load bootstrap for the finnews browser app: find the mount element,
//! refuse to render into nothing, and hand a present element to the UI
//! framework with the app wrapped in strict mode.
//!
//! Nothing here touches the browser. The DOM is reached through
//! [`mount::MountHost`], so the whole sequence runs under plain `cargo test`;
//! `crates/finnews_web` supplies the `web_sys` host and the Leptos renderer.
//!
//! ```
//! use finnews_bootstrap::prelude::*;
//!
//! struct NoDom;
//!
//! impl MountHost for NoDom {
//!     type Element = ();
//!     fn element_by_id(&self, _id: &str) -> Option<()> {
//!         None
//!     }
//!     fn create_fallback(&self, _id: &str) -> Result<(), String> {
//!         Ok(())
//!     }
//! }
//!
//! let cfg = BootstrapConfig::default().with_policy(MissingMountPolicy::Fallback);
//! let mounted = bootstrap(&NoDom, &cfg, |_target| Ok(())).unwrap();
//! assert_eq!(mounted.kind, MountKind::Fallback);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON config overrides via [`config::BootstrapConfig::from_json`]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod mount;
pub mod strict;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::bootstrap::{bootstrap, Mounted};
    pub use crate::config::{BootstrapConfig, LogLevel, MissingMountPolicy, StrictMode};
    pub use crate::error::{BootstrapError, ConfigError};
    pub use crate::mount::{MountHost, MountKind, MountTarget};
}
