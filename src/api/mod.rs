//! Freebox OS API facades
//!
//! Each facade maps typed method calls onto verb + path + payload triples
//! and hands them to a shared [`Access`](crate::access::Access).

pub mod airmedia;
pub mod dhcp;

pub use airmedia::{Airmedia, AirmediaAction, AirmediaConfig, AirmediaRequest, MediaType};
pub use dhcp::{Dhcp, DhcpConfig, DhcpV6Config, StaticLease};
