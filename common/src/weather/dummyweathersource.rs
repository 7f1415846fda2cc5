// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::reading::Reading;
use crate::weather::weathersource::WeatherSource;

/// Canned readings per location. Every fetch hands out the next one, starting over at the end.
#[derive(Deserialize, Default)]
pub struct DummyWeatherSource {
    locations: HashMap<String, Vec<Reading>>,

    #[serde(skip)]
    cursors: RefCell<HashMap<String, usize>>,
}

impl DummyWeatherSource {
    pub fn new() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./dummyweather.json");

        Self::from_json(json_data)
    }

    pub fn from_json(json_data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json_data)
    }

    /// The locations this source has readings for, sorted.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<_> = self.locations.keys().map(String::as_str).collect();
        locations.sort_unstable();
        locations
    }
}

impl WeatherSource for DummyWeatherSource {
    fn fetch_reading(&self, location: &str) -> Result<Reading, Box<dyn std::error::Error>> {
        let readings = match self.locations.get(location) {
            Some(readings) if !readings.is_empty() => readings,
            _ => return Err(format!("no readings for {location}").into()),
        };

        let mut cursors = self.cursors.borrow_mut();
        let cursor = cursors.entry(location.to_string()).or_default();
        let reading = readings[*cursor % readings.len()].clone();
        *cursor = (*cursor + 1) % readings.len();

        log::debug!("Dummy reading for {location}: {reading:?}");
        Ok(reading)
    }
}

#[test]
fn test_dummy_weather_source() {
    let source = DummyWeatherSource::new().unwrap();
    assert!(source.locations().contains(&"Melbourne"));

    let reading = source.fetch_reading("Melbourne").unwrap();
    assert_eq!(reading.temperature, "14.2");
    assert_eq!(reading.timestamp, "17/05/2024 14:00:00");
}

#[test]
fn test_dummy_weather_source_cycles() {
    let source = DummyWeatherSource::from_json(
        r#"{ "locations": { "Hobart": [
            { "temperature": "9.1", "rainfall": "0.0", "timestamp": "01/06/2024 08:00:00" },
            { "temperature": "9.4", "rainfall": "0.2", "timestamp": "01/06/2024 08:30:00" }
        ] } }"#,
    )
    .unwrap();

    let temperatures: Vec<_> = (0..3)
        .map(|_| source.fetch_reading("Hobart").unwrap().temperature)
        .collect();
    assert_eq!(temperatures, ["9.1", "9.4", "9.1"]);
}

#[test]
fn test_dummy_weather_source_unknown_location() {
    let source = DummyWeatherSource::new().unwrap();
    assert!(source.fetch_reading("Atlantis").is_err());
}
