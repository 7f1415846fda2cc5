// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::reading::Reading;

/// Somewhere a [`crate::LocationObserver`] gets its readings from.
pub trait WeatherSource {
    /// Fetches the latest reading for `location`.
    fn fetch_reading(&self, location: &str) -> Result<Reading, Box<dyn std::error::Error>>;
}
