//! AirMedia API
//!
//! See <https://dev.freebox.fr/sdk/os/airmedia/>.

use crate::{
    access::{path_segment, Access},
    error::FreeboxError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirmediaAction {
    #[default]
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    #[default]
    Video,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirmediaRequest {
    pub action: AirmediaAction,
    pub media: String,
    pub media_type: MediaType,
    pub password: String,
    pub position: u64,
}

/// Partial AirMedia configuration; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirmediaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

pub struct Airmedia {
    access: Arc<dyn Access>,
}

impl Airmedia {
    pub fn new(access: Arc<dyn Access>) -> Self {
        Self { access }
    }

    pub async fn get_airmedia_receivers(&self) -> Result<Value, FreeboxError> {
        self.access.get("airmedia/receivers/").await
    }

    /// Starts or stops playback of `request.media` on the named receiver.
    pub async fn send_airmedia(
        &self,
        receiver_name: &str,
        request: &AirmediaRequest,
    ) -> Result<(), FreeboxError> {
        let receiver_name = path_segment(receiver_name)?;
        self.access
            .post(
                &format!("airmedia/receivers/{receiver_name}/"),
                serde_json::to_value(request)?,
            )
            .await?;
        Ok(())
    }

    pub async fn get_airmedia_configuration(&self) -> Result<Value, FreeboxError> {
        self.access.get("airmedia/config/").await
    }

    pub async fn set_airmedia_configuration(
        &self,
        config: &AirmediaConfig,
    ) -> Result<Value, FreeboxError> {
        self.access
            .put("airmedia/config/", serde_json::to_value(config)?)
            .await
    }

    /// Sends only the fields that are set. Returns `None` without touching the
    /// box when there is nothing to update; an empty password is not sent.
    pub async fn update_airmedia_configuration(
        &self,
        enabled: Option<bool>,
        password: Option<&str>,
    ) -> Result<Option<Value>, FreeboxError> {
        if enabled.is_none() && password.is_none() {
            return Ok(None);
        }

        let config = AirmediaConfig {
            enabled,
            password: password.filter(|p| !p.is_empty()).map(str::to_string),
        };
        self.set_airmedia_configuration(&config).await.map(Some)
    }
}
