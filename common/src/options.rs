use serde::{Deserialize, Serialize};

/// Which measurement sections a feed shows.
///
/// Fixed when the adapter is built. `true` means the section is shown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayOptions {
    pub temperature: bool,
    pub rainfall: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            temperature: true,
            rainfall: true,
        }
    }
}

/// Index 0 is temperature, index 1 is rainfall.
impl From<[bool; 2]> for DisplayOptions {
    fn from([temperature, rainfall]: [bool; 2]) -> Self {
        Self {
            temperature,
            rainfall,
        }
    }
}

impl From<DisplayOptions> for [bool; 2] {
    fn from(options: DisplayOptions) -> Self {
        [options.temperature, options.rainfall]
    }
}

#[test]
fn test_mask_order() {
    let options = DisplayOptions::from([false, true]);
    assert!(!options.temperature);
    assert!(options.rainfall);

    let mask: [bool; 2] = options.into();
    assert_eq!(mask, [false, true]);
}

#[test]
fn test_missing_fields_default_to_shown() {
    let options: DisplayOptions = serde_json::from_str(r#"{ "rainfall": false }"#).unwrap();
    assert_eq!(options, DisplayOptions::from([true, false]));
}
