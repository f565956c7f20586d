//! # freebox-dhcp - An Async Freebox OS DHCP Client
//!
//! Typed bindings for the DHCP endpoints of the Freebox OS REST API:
//! static leases, dynamic lease listing and the DHCPv4/DHCPv6 server
//! configuration. AirMedia endpoints are exposed the same way.
//!
//! ## Features
//!
//! - One async method per API endpoint
//! - Pluggable transport through the [`Access`] trait
//! - reqwest-based [`HttpAccess`] with envelope unwrapping
//! - Asynchronous operation using Tokio
//!
//! Opening a session is out of scope: [`HttpAccess`] is given a session token
//! obtained beforehand.
//!
//! ## Example
//!
//! ```rust,no_run
//! use freebox_dhcp::{AccessConfig, Dhcp, HttpAccess, StaticLease};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AccessConfig::new("192.168.1.254".to_string(), "session-token".to_string());
//!     let dhcp = Dhcp::new(Arc::new(HttpAccess::new(&config)?));
//!     let lease = StaticLease {
//!         ip: "192.168.1.20".to_string(),
//!         mac: "00:24:d4:7e:00:4c".to_string(),
//!         comment: "nas".to_string(),
//!     };
//!     let created = dhcp.create_dhcp_static_lease(&lease).await?;
//!     println!("Created lease: {created}");
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod api;
pub mod config;
pub mod error;

pub use access::{Access, HttpAccess};
pub use api::{Airmedia, Dhcp, DhcpConfig, DhcpV6Config, StaticLease};
pub use config::{AccessConfig, Args};
pub use error::FreeboxError;
