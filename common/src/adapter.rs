use crate::frame::WeatherFrame;
use crate::observer::ObserverLink;
use crate::options::DisplayOptions;
use crate::reading::{self, RAINFALL_UNIT, TEMPERATURE_UNIT};

/// Receives the notifications of a [`crate::LocationObserver`].
pub trait MonitorAdapter {
    fn display_temperature(&mut self, temperature: &str);

    fn display_rainfall(&mut self, rainfall: &str);

    /// Called once per update cycle with the timestamp of the reading.
    fn display_last_updated(&mut self, timestamp: &str);

    /// Unregisters the adapter from its observer. Afterwards it receives no notifications.
    fn dispose_myself(&mut self);

    /// Called by the observer when the adapter is registered.
    fn set_location_observer(&mut self, link: ObserverLink);
}

/// Source of the retrieval time.
pub type Clock = Box<dyn Fn() -> chrono::NaiveDateTime>;

/// Translates observer notifications into labels on a [`WeatherFrame`].
///
/// Building the adapter builds and configures its frame but does not show it; call
/// [`LiveFeedAdapter::show`] for that.
pub struct LiveFeedAdapter<F> {
    frame: F,
    options: DisplayOptions,
    title: String,
    location: String,
    observer: Option<ObserverLink>,
    clock: Clock,
}

impl<F: WeatherFrame> LiveFeedAdapter<F> {
    /// Creates the adapter and its frame.
    ///
    /// `build_frame` is given the window title (`"<source> Live Feed"`) and `location`. Sections
    /// switched off in `options` are disabled right away.
    pub fn new<B>(
        options: impl Into<DisplayOptions>,
        location: &str,
        source: &str,
        build_frame: B,
    ) -> Self
    where
        B: FnOnce(&str, &str) -> F,
    {
        let options = options.into();
        let title = format!("{source} Live Feed");
        let frame = build_frame(&title, location);

        let mut adapter = Self {
            frame,
            options,
            title,
            location: location.into(),
            observer: None,
            clock: Box::new(|| chrono::Local::now().naive_local()),
        };
        adapter.apply_display_options();
        adapter
    }

    /// Replaces the clock used for the retrieval time.
    pub fn with_clock(mut self, clock: impl Fn() -> chrono::NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!("Showing {}", self.title);
        self.frame.show()
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut F {
        &mut self.frame
    }

    fn apply_display_options(&mut self) {
        if !self.options.temperature {
            self.frame.disable_temperature_data();
        }
        if !self.options.rainfall {
            self.frame.disable_rain_data();
        }
    }

    fn display_retrieval_time(&mut self) {
        let now = (self.clock)();
        self.frame.set_last_updated(&reading::format_timestamp(&now));
    }
}

impl<F: WeatherFrame> MonitorAdapter for LiveFeedAdapter<F> {
    fn display_temperature(&mut self, temperature: &str) {
        self.frame
            .set_temperature_label(&reading::display_value(temperature, TEMPERATURE_UNIT));
    }

    fn display_rainfall(&mut self, rainfall: &str) {
        self.frame
            .set_rainfall_label(&reading::display_value(rainfall, RAINFALL_UNIT));
    }

    fn display_last_updated(&mut self, timestamp: &str) {
        // Retrieval time is when we processed the update, not when it was measured.
        self.display_retrieval_time();
        self.frame.set_rain_timestamp_label(timestamp);
        self.frame.set_temp_timestamp_label(timestamp);
    }

    fn dispose_myself(&mut self) {
        match &self.observer {
            Some(link) => {
                if !link.remove() {
                    log::debug!("{} was already disposed", self.title);
                }
            }
            None => log::warn!("{} disposed before it was registered", self.title),
        }
    }

    fn set_location_observer(&mut self, link: ObserverLink) {
        self.observer = Some(link);
    }
}
