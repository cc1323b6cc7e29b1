//! Dropdown list construction for tunables with discrete option sets.
//!
//! The device may report a current value outside its advertised option set
//! (firmware downgrade, manual override). The list must still offer that
//! value instead of silently dropping it, labeled as custom.

use serde::{Deserialize, Serialize};

/// One selectable dropdown entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayOption {
    pub label: String,
    pub value: u32,
}

/// How option values are rendered in labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Decimal,
    /// Decimal plus hexadecimal, used for the version rolling mask
    Hex,
}

impl LabelStyle {
    fn base(self, value: u32) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::Hex => format!("{value} - 0x{value:x}"),
        }
    }

    fn known(self, value: u32, is_default: bool) -> String {
        if is_default {
            format!("{} (default)", self.base(value))
        } else {
            self.base(value)
        }
    }

    fn custom(self, value: u32) -> String {
        format!("{} (Custom)", self.base(value))
    }
}

/// Merge a known option set with the current field value into a display list.
///
/// Invariants: the result is strictly ascending, each value appears at most
/// once and a non-zero current value is always present, appended as
/// "(Custom)" when the known set does not contain it. An empty known set
/// yields an empty list (the caller renders no dropdown).
pub fn merge_options(
    known: &[u32],
    current: Option<u32>,
    default: Option<u32>,
    style: LabelStyle,
) -> Vec<DisplayOption> {
    if known.is_empty() {
        return Vec::new();
    }

    let mut values = known.to_vec();
    values.sort_unstable();
    values.dedup();

    let mut options: Vec<DisplayOption> = values
        .iter()
        .map(|&value| DisplayOption {
            label: style.known(value, default == Some(value)),
            value,
        })
        .collect();

    if let Some(current) = current {
        if current != 0 && !values.contains(&current) {
            options.push(DisplayOption {
                label: style.custom(current),
                value: current,
            });
            options.sort_unstable_by_key(|option| option.value);
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[DisplayOption]) -> Vec<u32> {
        options.iter().map(|option| option.value).collect()
    }

    #[test]
    fn empty_known_set_yields_no_dropdown() {
        assert!(merge_options(&[], Some(425), Some(425), LabelStyle::Decimal).is_empty());
    }

    #[test]
    fn default_value_is_annotated() {
        let options = merge_options(&[400, 425, 450], Some(425), Some(425), LabelStyle::Decimal);

        assert_eq!(
            options
                .iter()
                .map(|option| option.label.as_str())
                .collect::<Vec<_>>(),
            vec!["400", "425 (default)", "450"]
        );
    }

    #[test]
    fn current_value_in_known_set_is_not_duplicated() {
        let options = merge_options(&[400, 425, 450], Some(425), Some(425), LabelStyle::Decimal);

        assert_eq!(options.len(), 3);
        assert_eq!(values(&options), vec![400, 425, 450]);
    }

    #[test]
    fn unknown_current_value_is_appended_as_custom_and_sorted() {
        let options = merge_options(&[400, 450], Some(437), Some(425), LabelStyle::Decimal);

        assert_eq!(values(&options), vec![400, 437, 450]);
        assert_eq!(options[1].label, "437 (Custom)");
    }

    #[test]
    fn zero_current_value_is_not_appended() {
        let options = merge_options(&[400, 450], Some(0), None, LabelStyle::Decimal);

        assert_eq!(values(&options), vec![400, 450]);
    }

    #[test]
    fn no_current_value_keeps_known_set_only() {
        let options = merge_options(&[450, 400], None, None, LabelStyle::Decimal);

        assert_eq!(values(&options), vec![400, 450]);
    }

    #[test]
    fn duplicate_known_values_are_collapsed() {
        let options = merge_options(&[450, 400, 450], Some(450), None, LabelStyle::Decimal);

        assert_eq!(values(&options), vec![400, 450]);
    }

    #[test]
    fn result_is_strictly_ascending() {
        let options = merge_options(&[550, 400, 490, 475], Some(437), Some(490), LabelStyle::Decimal);

        assert!(options.windows(2).all(|pair| pair[0].value < pair[1].value));
        assert_eq!(options.iter().filter(|o| o.value == 437).count(), 1);
    }

    #[test]
    fn hex_style_includes_hexadecimal_representation() {
        let options = merge_options(
            &[0x0000_2000, 0x1FFF_E000],
            Some(0x0000_6000),
            Some(0x1FFF_E000),
            LabelStyle::Hex,
        );

        assert_eq!(options[0].label, "8192 - 0x2000");
        assert_eq!(options[1].label, "24576 - 0x6000 (Custom)");
        assert_eq!(options[2].label, "536862720 - 0x1fffe000 (default)");
    }
}
