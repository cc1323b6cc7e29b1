use serde::{Deserialize, Serialize};

/// Ticket mask difficulty default shared by all ASIC models
pub const DEFAULT_TICKET_MASK_DIFF: u32 = 256;

/// Version rolling mask default (0x1FFFE000) shared by all ASIC models
pub const DEFAULT_VERSION_MASK: u32 = 0x1FFF_E000;

/// Mining chip variant, determines the default frequency and core voltage
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AsicModel {
    BM1366,
    BM1368,
    BM1370,
    BM1397,
    /// Model string the dashboard does not know; no defaults are annotated
    #[default]
    #[serde(other)]
    Unknown,
}

impl AsicModel {
    /// Default frequency in MHz for this model
    pub fn default_frequency(self) -> Option<u32> {
        match self {
            Self::BM1366 => Some(485),
            Self::BM1368 => Some(490),
            Self::BM1370 => Some(525),
            Self::BM1397 => Some(425),
            Self::Unknown => None,
        }
    }

    /// Default core voltage in mV for this model
    pub fn default_voltage(self) -> Option<u32> {
        match self {
            Self::BM1366 => Some(1200),
            Self::BM1368 => Some(1166),
            Self::BM1370 => Some(1150),
            Self::BM1397 => Some(1400),
            Self::Unknown => None,
        }
    }
}

/// Frequency and voltage option sets advertised by the device
/// (`GET /api/system/asic`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsicOptions {
    #[serde(rename = "frequencyOptions")]
    pub frequency_options: Vec<u32>,
    #[serde(rename = "voltageOptions")]
    pub voltage_options: Vec<u32>,
}

/// Stratum mask option sets advertised by the device
/// (`GET /api/system/asicmask`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsicMaskOptions {
    #[serde(rename = "ticketMaskDiffOptions")]
    pub ticket_mask_diff_options: Vec<u32>,
    #[serde(rename = "versionMaskOptions")]
    pub version_mask_options: Vec<u32>,
}
