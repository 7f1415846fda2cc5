use slint::ComponentHandle;
use weather_monitor_common::WeatherFrame;

use crate::FeedWindow;

/// A [`WeatherFrame`] backed by a Slint window.
pub struct SlintWeatherFrame {
    ui: FeedWindow,
}

impl SlintWeatherFrame {
    pub fn new(ui: FeedWindow, title: &str, location: &str) -> Self {
        ui.set_feed_title(title.into());
        ui.set_location(location.into());
        Self { ui }
    }

    /// Runs `callback` when the user closes the window. The window is hidden afterwards.
    pub fn on_close_requested(&self, mut callback: impl FnMut() + 'static) {
        self.ui.window().on_close_requested(move || {
            callback();
            slint::CloseRequestResponse::HideWindow
        });
    }
}

impl WeatherFrame for SlintWeatherFrame {
    fn set_temperature_label(&mut self, text: &str) {
        self.ui.set_temperature(text.into());
    }

    fn set_rainfall_label(&mut self, text: &str) {
        self.ui.set_rainfall(text.into());
    }

    fn set_temp_timestamp_label(&mut self, text: &str) {
        self.ui.set_temperature_timestamp(text.into());
    }

    fn set_rain_timestamp_label(&mut self, text: &str) {
        self.ui.set_rainfall_timestamp(text.into());
    }

    fn set_last_updated(&mut self, text: &str) {
        self.ui.set_last_updated(text.into());
    }

    fn disable_temperature_data(&mut self) {
        self.ui.set_temperature_enabled(false);
    }

    fn disable_rain_data(&mut self) {
        self.ui.set_rainfall_enabled(false);
    }

    fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(self.ui.show()?)
    }
}
