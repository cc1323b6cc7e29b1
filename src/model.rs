use serde::{Deserialize, Serialize};

use crate::options::{merge_options, DisplayOption, LabelStyle};
use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly
/// depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Staging area for the three concurrent load requests.
///
/// The form is only built once every slot is filled; the first failure drops
/// the whole staging area, aborting the join.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub info: Option<DeviceInfo>,
    pub asic: Option<AsicOptions>,
    pub masks: Option<AsicMaskOptions>,
}

impl PendingLoad {
    pub fn is_complete(&self) -> bool {
        self.info.is_some() && self.asic.is_some() && self.masks.is_some()
    }
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Target device; empty for the current device
    pub device_uri: String,

    // Device state
    pub asic_model: AsicModel,
    pub frequency_options: Vec<u32>,
    pub voltage_options: Vec<u32>,
    pub ticket_mask_diff_options: Vec<u32>,
    pub version_mask_options: Vec<u32>,

    // Merged dropdown lists, recomputed whenever the option sets or the form
    // change. Plain fields so they cross the FFI with the serialized view
    // model; the shell renders them as-is.
    pub frequency_dropdown: Vec<DisplayOption>,
    pub voltage_dropdown: Vec<DisplayOption>,
    pub stratum_diff_dropdown: Vec<DisplayOption>,
    pub version_mask_dropdown: Vec<DisplayOption>,

    // Form state, None until the load join completed
    pub form: Option<SettingsForm>,

    // Load join staging, None when no load is in flight
    pub pending_load: Option<PendingLoad>,

    // Restricted tunables unlock state
    pub settings_unlocked: bool,

    // UI state
    pub saved_changes: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Recompute the four merged dropdown lists from the option sets and the
    /// current form values.
    ///
    /// Must be called after anything that touches the option sets, the ASIC
    /// model or the form; the version mask dropdown labels carry the hex
    /// representation.
    pub fn refresh_dropdowns(&mut self) {
        let current_frequency = self.form.as_ref().map(|form| form.frequency);
        let current_voltage = self.form.as_ref().map(|form| form.core_voltage);
        let current_diff = self.form.as_ref().map(|form| form.ticket_mask_diff);
        let current_mask = self.form.as_ref().map(|form| form.version_mask);

        self.frequency_dropdown = merge_options(
            &self.frequency_options,
            current_frequency,
            self.asic_model.default_frequency(),
            LabelStyle::Decimal,
        );
        self.voltage_dropdown = merge_options(
            &self.voltage_options,
            current_voltage,
            self.asic_model.default_voltage(),
            LabelStyle::Decimal,
        );
        self.stratum_diff_dropdown = merge_options(
            &self.ticket_mask_diff_options,
            current_diff,
            Some(DEFAULT_TICKET_MASK_DIFF),
            LabelStyle::Decimal,
        );
        self.version_mask_dropdown = merge_options(
            &self.version_mask_options,
            current_mask,
            Some(DEFAULT_VERSION_MASK),
            LabelStyle::Hex,
        );
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
