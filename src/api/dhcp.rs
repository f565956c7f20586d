//! DHCP API
//!
//! Static leases, dynamic lease listing and the DHCPv4/DHCPv6 server
//! configuration. See <https://dev.freebox.fr/sdk/os/dhcp/>.

use crate::{
    access::{path_segment, Access},
    error::FreeboxError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// An IP-to-MAC assignment pinned by the DHCP server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLease {
    pub ip: String,
    pub mac: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpConfig {
    pub always_broadcast: bool,
    pub dns: Vec<String>,
    pub enabled: bool,
    pub ip_range_start: String,
    pub ip_range_end: String,
    pub sticky_assign: bool,
}

impl Default for DhcpConfig {
    fn default() -> Self {
        Self {
            always_broadcast: true,
            dns: vec![String::new()],
            enabled: true,
            ip_range_start: String::new(),
            ip_range_end: String::new(),
            sticky_assign: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpV6Config {
    pub dns: Vec<String>,
    pub enabled: bool,
    pub use_custom_dns: bool,
}

impl Default for DhcpV6Config {
    fn default() -> Self {
        Self {
            dns: vec![String::new()],
            enabled: true,
            use_custom_dns: false,
        }
    }
}

pub struct Dhcp {
    access: Arc<dyn Access>,
}

impl Dhcp {
    pub fn new(access: Arc<dyn Access>) -> Self {
        Self { access }
    }

    /// Create dhcp static lease
    pub async fn create_dhcp_static_lease(
        &self,
        static_lease: &StaticLease,
    ) -> Result<Value, FreeboxError> {
        self.access
            .post("dhcp/static_lease/", serde_json::to_value(static_lease)?)
            .await
    }

    /// Delete dhcp static lease
    pub async fn delete_dhcp_static_lease(&self, lease_id: &str) -> Result<Value, FreeboxError> {
        let lease_id = path_segment(lease_id)?;
        self.access
            .delete(&format!("dhcp/static_lease/{lease_id}"))
            .await
    }

    /// Edit dhcp static lease
    pub async fn edit_dhcp_static_lease(
        &self,
        lease_id: &str,
        static_lease: &StaticLease,
    ) -> Result<Value, FreeboxError> {
        let lease_id = path_segment(lease_id)?;
        self.access
            .put(
                &format!("dhcp/static_lease/{lease_id}"),
                serde_json::to_value(static_lease)?,
            )
            .await
    }

    /// Get DHCP configuration
    pub async fn get_config(&self) -> Result<Value, FreeboxError> {
        self.access.get("dhcp/config/").await
    }

    /// Update DHCP configuration
    pub async fn set_config(&self, dhcp_configuration: &DhcpConfig) -> Result<Value, FreeboxError> {
        self.access
            .put("dhcp/config/", serde_json::to_value(dhcp_configuration)?)
            .await
    }

    /// Get DHCP v6 configuration
    pub async fn get_v6_config(&self) -> Result<Value, FreeboxError> {
        self.access.get("dhcpv6/config/").await
    }

    /// Update DHCP v6 configuration
    pub async fn set_v6_config(
        &self,
        dhcp_v6_configuration: &DhcpV6Config,
    ) -> Result<Value, FreeboxError> {
        self.access
            .put("dhcpv6/config/", serde_json::to_value(dhcp_v6_configuration)?)
            .await
    }

    /// Get the list of DHCP dynamic leases
    pub async fn get_dhcp_dynamic_leases(&self) -> Result<Value, FreeboxError> {
        self.access.get("dhcp/dynamic_lease/").await
    }

    /// Get the list of DHCP static leases
    pub async fn get_dhcp_static_leases(&self) -> Result<Value, FreeboxError> {
        self.access.get("dhcp/static_lease/").await
    }
}
