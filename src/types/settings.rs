use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_valid::Validate;

use crate::types::AsicModel;

/// Placeholder the device sends instead of the stored stratum password.
/// A form still holding this value must not overwrite the stored password.
pub const MASKED_PASSWORD: &str = "*****";

fn masked_password() -> String {
    MASKED_PASSWORD.to_string()
}

/// Overheat protection state, numeric on the wire
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum OverheatMode {
    #[default]
    Off = 0,
    Triggered = 1,
}

/// Device configuration as reported by `GET /api/system/info`.
///
/// The firmware stores booleans as 0/1 integers; field names follow its JSON
/// keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(rename = "ASICModel", default)]
    pub asic_model: AsicModel,
    #[serde(default)]
    pub flipscreen: u8,
    #[serde(default)]
    pub invertscreen: u8,
    #[serde(default)]
    pub display_timeout: i32,
    #[serde(default)]
    pub core_voltage: u32,
    #[serde(default)]
    pub frequency: u32,
    #[serde(default)]
    pub ticket_mask_diff: u32,
    #[serde(default)]
    pub version_mask: u32,
    #[serde(default = "masked_password")]
    pub stratum_password: String,
    #[serde(default)]
    pub autofanspeed: u8,
    #[serde(default)]
    pub fanspeed: u32,
    #[serde(default)]
    pub temptarget: u32,
    #[serde(rename = "overheat_mode", default)]
    pub overheat_mode: OverheatMode,
    #[serde(default)]
    pub overclock_enabled: u8,
}

/// Editable form state derived from [`DeviceInfo`].
///
/// `fanspeed_enabled` / `temptarget_enabled` are derived flags, not user
/// input: exactly one of the two is active, following the auto fan toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SettingsForm {
    pub flipscreen: bool,
    pub invertscreen: bool,
    #[validate(minimum = -1)]
    #[validate(maximum = 71582)]
    pub display_timeout: i32,
    pub core_voltage: u32,
    pub frequency: u32,
    pub ticket_mask_diff: u32,
    pub version_mask: u32,
    pub stratum_password: String,
    pub autofanspeed: bool,
    #[validate(maximum = 100)]
    pub fanspeed: u32,
    pub temptarget: u32,
    pub overheat_mode: OverheatMode,
    pub fanspeed_enabled: bool,
    pub temptarget_enabled: bool,
}

impl SettingsForm {
    pub fn from_info(info: &DeviceInfo) -> Self {
        let mut form = Self {
            flipscreen: info.flipscreen == 1,
            invertscreen: info.invertscreen == 1,
            display_timeout: info.display_timeout,
            core_voltage: info.core_voltage,
            frequency: info.frequency,
            ticket_mask_diff: info.ticket_mask_diff,
            version_mask: info.version_mask,
            stratum_password: info.stratum_password.clone(),
            autofanspeed: info.autofanspeed == 1,
            fanspeed: info.fanspeed,
            temptarget: info.temptarget,
            overheat_mode: info.overheat_mode,
            fanspeed_enabled: false,
            temptarget_enabled: false,
        };
        form.apply_fan_mode();
        form
    }

    /// Manual fan speed and target temperature are mutually exclusive; the
    /// active one follows the auto fan toggle.
    pub fn apply_fan_mode(&mut self) {
        self.fanspeed_enabled = !self.autofanspeed;
        self.temptarget_enabled = self.autofanspeed;
    }

    /// Build the PATCH payload from the raw form state, disabled fields
    /// included. A still-masked stratum password is dropped entirely so the
    /// device keeps the stored one.
    pub fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            flipscreen: u8::from(self.flipscreen),
            invertscreen: u8::from(self.invertscreen),
            display_timeout: self.display_timeout,
            core_voltage: self.core_voltage,
            frequency: self.frequency,
            ticket_mask_diff: self.ticket_mask_diff,
            version_mask: self.version_mask,
            stratum_password: (self.stratum_password != MASKED_PASSWORD)
                .then(|| self.stratum_password.clone()),
            autofanspeed: u8::from(self.autofanspeed),
            fanspeed: self.fanspeed,
            temptarget: self.temptarget,
            overheat_mode: self.overheat_mode,
        }
    }
}

/// Payload for `PATCH /api/system`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub flipscreen: u8,
    pub invertscreen: u8,
    pub display_timeout: i32,
    pub core_voltage: u32,
    pub frequency: u32,
    pub ticket_mask_diff: u32,
    pub version_mask: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stratum_password: Option<String>,
    pub autofanspeed: u8,
    pub fanspeed: u32,
    pub temptarget: u32,
    #[serde(rename = "overheat_mode")]
    pub overheat_mode: OverheatMode,
}

/// Minimal payload persisting the overclock unlock flag
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverclockUpdate {
    pub overclock_enabled: u8,
}
