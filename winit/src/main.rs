// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod frame;

use std::cell::RefCell;
use std::rc::Rc;

use weather_monitor_common::weather::{DummyWeatherSource, WeatherSource};
use weather_monitor_common::{FeedConfig, LiveFeedAdapter, LocationObserver, MonitorAdapter};

use crate::frame::SlintWeatherFrame;

/// Environment variable naming a JSON feed config. Defaults are used when it is unset.
const CONFIG_ENV: &str = "WEATHER_MONITOR_CONFIG";

/// Our App struct that holds the observer, the live feed adapter and the refresh timer.
///
/// The observer pulls a reading from the weather source on every timer tick and pushes it to the
/// adapter, which writes it into the window.
struct App {
    config: FeedConfig,
    source: Rc<dyn WeatherSource>,
    observer: LocationObserver,
    adapter: Rc<RefCell<LiveFeedAdapter<SlintWeatherFrame>>>,
    timer: slint::Timer,
}

impl App {
    /// Create a new App struct.
    ///
    /// Builds the window, registers its adapter with the observer and hooks the window's close
    /// button up to the adapter's disposal.
    fn new(config: FeedConfig) -> anyhow::Result<Self> {
        let source: Rc<dyn WeatherSource> = Rc::new(DummyWeatherSource::new()?);
        let observer = LocationObserver::new(&config.location);

        let window = FeedWindow::new()?;
        let adapter = LiveFeedAdapter::new(
            config.display,
            &config.location,
            &config.source,
            |title, location| SlintWeatherFrame::new(window, title, location),
        );
        let adapter = Rc::new(RefCell::new(adapter));
        observer.add_monitor_adapter(adapter.clone());

        // The window lives inside the adapter, so it only gets a weak handle back.
        let adapter_handle = Rc::downgrade(&adapter);
        adapter.borrow().frame().on_close_requested(move || {
            if let Some(adapter) = adapter_handle.upgrade() {
                adapter.borrow_mut().dispose_myself();
            }
        });

        Ok(Self {
            config,
            source,
            observer,
            adapter,
            timer: slint::Timer::default(),
        })
    }

    /// Show the window, refresh once right away and then periodically until the feed is closed.
    fn run(&mut self) -> anyhow::Result<()> {
        self.adapter
            .borrow_mut()
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show {}: {e}", self.config.source))?;

        self.observer
            .refresh(self.source.as_ref())
            .map_err(|e| anyhow::anyhow!("Initial refresh failed: {e}"))?;

        let observer = self.observer.clone();
        let source = self.source.clone();

        self.timer.start(
            slint::TimerMode::Repeated,
            self.config.refresh_interval(),
            move || {
                if observer.is_empty() {
                    return;
                }
                if let Err(e) = observer.refresh(source.as_ref()) {
                    log::warn!("Refresh for {} failed: {e}", observer.location());
                }
            },
        );

        // Returns once the last window is closed.
        slint::run_event_loop()?;

        log::info!("{} closed, {} adapter(s) left", self.config.location, self.observer.len());
        Ok(())
    }
}

fn load_config() -> anyhow::Result<FeedConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            FeedConfig::load(&path)
                .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))
        }
        None => Ok(FeedConfig::default()),
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config()?;
    let mut app = App::new(config)?;

    app.run()
}
