/// The presentation surface a [`crate::LiveFeedAdapter`] writes into.
///
/// Implemented by the desktop window and by [`MemoryFrame`].
pub trait WeatherFrame {
    fn set_temperature_label(&mut self, text: &str);
    fn set_rainfall_label(&mut self, text: &str);
    fn set_temp_timestamp_label(&mut self, text: &str);
    fn set_rain_timestamp_label(&mut self, text: &str);

    /// Sets the retrieval time, i.e. when the feed last processed an update.
    fn set_last_updated(&mut self, text: &str);

    /// Hides the temperature section.
    fn disable_temperature_data(&mut self);

    /// Hides the rainfall section.
    fn disable_rain_data(&mut self);

    /// Makes the frame visible.
    fn show(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}

/// A frame that only remembers what it was told. Useful without a windowing system.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryFrame {
    pub title: String,
    pub location: String,
    pub temperature: String,
    pub rainfall: String,
    pub temperature_timestamp: String,
    pub rainfall_timestamp: String,
    pub last_updated: String,
    pub temperature_enabled: bool,
    pub rainfall_enabled: bool,
    pub visible: bool,
}

impl MemoryFrame {
    pub fn new(title: &str, location: &str) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            temperature: String::new(),
            rainfall: String::new(),
            temperature_timestamp: String::new(),
            rainfall_timestamp: String::new(),
            last_updated: String::new(),
            temperature_enabled: true,
            rainfall_enabled: true,
            visible: false,
        }
    }
}

impl WeatherFrame for MemoryFrame {
    fn set_temperature_label(&mut self, text: &str) {
        self.temperature = text.into();
    }

    fn set_rainfall_label(&mut self, text: &str) {
        self.rainfall = text.into();
    }

    fn set_temp_timestamp_label(&mut self, text: &str) {
        self.temperature_timestamp = text.into();
    }

    fn set_rain_timestamp_label(&mut self, text: &str) {
        self.rainfall_timestamp = text.into();
    }

    fn set_last_updated(&mut self, text: &str) {
        self.last_updated = text.into();
    }

    fn disable_temperature_data(&mut self) {
        self.temperature_enabled = false;
    }

    fn disable_rain_data(&mut self) {
        self.rainfall_enabled = false;
    }

    fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.visible = true;
        Ok(())
    }
}
