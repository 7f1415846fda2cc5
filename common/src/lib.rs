//! Observer-to-view plumbing for the weather monitor.
//!
//! A [`observer::LocationObserver`] pushes raw readings to every registered
//! [`adapter::MonitorAdapter`]. The [`adapter::LiveFeedAdapter`] validates and formats those
//! readings and hands them to a [`frame::WeatherFrame`], which is whatever draws the labels.

pub mod adapter;
pub mod config;
pub mod frame;
pub mod observer;
pub mod options;
pub mod reading;
pub mod weather;

pub use adapter::{LiveFeedAdapter, MonitorAdapter};
pub use config::FeedConfig;
pub use frame::{MemoryFrame, WeatherFrame};
pub use observer::{AdapterId, LocationObserver, ObserverLink};
pub use options::DisplayOptions;
pub use reading::Reading;
