use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the settings editor
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Settings(SettingsEvent),
    Overclock(OverclockEvent),
    Device(DeviceEvent),
    Ui(UiEvent),
}

/// Settings lifecycle: load join, form edits, submit
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// Start loading device info and option sets.
    ///
    /// `device_uri` is empty for the current device; `overclock_param` is true
    /// when the unlock query parameter was present in the URL at construction.
    Initialize {
        device_uri: String,
        overclock_param: bool,
    },

    /// Shell replaced the whole form (user edited a field)
    FormChanged(SettingsForm),
    /// Auto fan toggle flipped; dependent fields are reevaluated synchronously
    SetAutoFanSpeed(bool),

    Save,
    DisableOverheatMode,

    /// View is being torn down; late responses must not mutate state
    Teardown,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    InfoLoaded(Result<DeviceInfo, String>),
    #[serde(skip)]
    AsicOptionsLoaded(Result<AsicOptions, String>),
    #[serde(skip)]
    MaskOptionsLoaded(Result<AsicMaskOptions, String>),
    #[serde(skip)]
    SaveResponse(Result<(), String>),
}

/// Overclock unlock state machine
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum OverclockEvent {
    Toggle(bool),

    // Best-effort persistence outcome (logged only, never surfaced)
    #[serde(skip)]
    PersistResponse(Result<(), String>),
}

/// Device actions outside the settings form
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Restart,

    #[serde(skip)]
    RestartResponse(Result<(), String>),
}

/// UI actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}
