use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::adapter::MonitorAdapter;
use crate::reading::Reading;
use crate::weather::WeatherSource;

pub type MonitorAdapterPointer = Rc<RefCell<dyn MonitorAdapter>>;

/// Identifies one registration with a [`LocationObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdapterId(u64);

struct ObserverState {
    location: String,
    next_id: Cell<u64>,
    adapters: RefCell<Vec<(AdapterId, MonitorAdapterPointer)>>,
}

impl ObserverState {
    fn remove(&self, id: AdapterId) -> bool {
        let mut adapters = self.adapters.borrow_mut();
        let before = adapters.len();
        adapters.retain(|(registered, _)| *registered != id);
        adapters.len() != before
    }
}

/// Pushes the readings of one location to every registered adapter.
///
/// Clones are handles to the same observer.
#[derive(Clone)]
pub struct LocationObserver(Rc<ObserverState>);

impl LocationObserver {
    pub fn new(location: &str) -> Self {
        Self(Rc::new(ObserverState {
            location: location.into(),
            next_id: Cell::new(0),
            adapters: RefCell::default(),
        }))
    }

    pub fn location(&self) -> &str {
        &self.0.location
    }

    /// Registers `adapter` and hands it a link back to this observer.
    ///
    /// An adapter is registered at most once; adding it again returns its existing id and leaves
    /// its link alone.
    ///
    /// # Panics
    ///
    /// If `adapter` is currently borrowed.
    pub fn add_monitor_adapter<A>(&self, adapter: Rc<RefCell<A>>) -> AdapterId
    where
        A: MonitorAdapter + 'static,
    {
        let address = Rc::as_ptr(&adapter) as *const ();
        let existing = self
            .0
            .adapters
            .borrow()
            .iter()
            .find(|(_, registered)| Rc::as_ptr(registered) as *const () == address)
            .map(|(id, _)| *id);
        if let Some(id) = existing {
            log::warn!("Adapter {id:?} is already registered for {}", self.0.location);
            return id;
        }

        let id = AdapterId(self.0.next_id.get());
        self.0.next_id.set(id.0 + 1);

        adapter.borrow_mut().set_location_observer(ObserverLink {
            observer: Rc::downgrade(&self.0),
            id,
        });
        let adapter: MonitorAdapterPointer = adapter;
        self.0.adapters.borrow_mut().push((id, adapter));

        log::info!("Registered adapter {id:?} for {}", self.0.location);
        id
    }

    /// Drops the registration `id`. Returns `false` if there was none.
    pub fn remove_monitor_adapter(&self, id: AdapterId) -> bool {
        let removed = self.0.remove(id);
        if removed {
            log::info!("Removed adapter {id:?} from {}", self.0.location);
        }
        removed
    }

    pub fn contains(&self, id: AdapterId) -> bool {
        self.0.adapters.borrow().iter().any(|(registered, _)| *registered == id)
    }

    pub fn len(&self) -> usize {
        self.0.adapters.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.adapters.borrow().is_empty()
    }

    /// Sends `reading` to every adapter in registration order.
    ///
    /// Adapters may be removed while this runs; a removed adapter gets nothing further.
    pub fn notify(&self, reading: &Reading) {
        let adapters: Vec<_> = self.0.adapters.borrow().clone();

        log::debug!("Notifying {} adapter(s) for {}: {reading:?}", adapters.len(), self.0.location);

        for (id, adapter) in adapters {
            if !self.contains(id) {
                continue;
            }
            let mut adapter = adapter.borrow_mut();
            adapter.display_temperature(&reading.temperature);
            adapter.display_rainfall(&reading.rainfall);
            adapter.display_last_updated(&reading.timestamp);
        }
    }

    /// Fetches the current reading for this location from `source` and notifies all adapters.
    pub fn refresh(&self, source: &dyn WeatherSource) -> Result<(), Box<dyn std::error::Error>> {
        let reading = source.fetch_reading(&self.0.location)?;
        self.notify(&reading);
        Ok(())
    }
}

/// An adapter's non-owning way back to the observer it is registered with.
#[derive(Clone)]
pub struct ObserverLink {
    observer: Weak<ObserverState>,
    id: AdapterId,
}

impl ObserverLink {
    pub fn id(&self) -> AdapterId {
        self.id
    }

    /// Asks the observer to drop this registration. Returns `false` if the observer is gone or
    /// the registration was already removed.
    pub fn remove(&self) -> bool {
        match self.observer.upgrade() {
            Some(observer) => LocationObserver(observer).remove_monitor_adapter(self.id),
            None => false,
        }
    }
}

impl std::fmt::Debug for ObserverLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverLink")
            .field("id", &self.id)
            .field("alive", &(self.observer.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remembers every call; disposes itself when it sees the rainfall value `"stop"`.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        link: Option<ObserverLink>,
    }

    impl MonitorAdapter for Recorder {
        fn display_temperature(&mut self, temperature: &str) {
            self.calls.push(format!("temperature {temperature}"));
        }

        fn display_rainfall(&mut self, rainfall: &str) {
            self.calls.push(format!("rainfall {rainfall}"));
            if rainfall == "stop" {
                self.dispose_myself();
            }
        }

        fn display_last_updated(&mut self, timestamp: &str) {
            self.calls.push(format!("updated {timestamp}"));
        }

        fn dispose_myself(&mut self) {
            if let Some(link) = &self.link {
                link.remove();
            }
        }

        fn set_location_observer(&mut self, link: ObserverLink) {
            self.link = Some(link);
        }
    }

    fn reading(temperature: &str, rainfall: &str) -> Reading {
        Reading {
            temperature: temperature.into(),
            rainfall: rainfall.into(),
            timestamp: "01/01/2024 00:00:00".into(),
        }
    }

    #[test]
    fn test_registration_links_adapter() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));

        let id = observer.add_monitor_adapter(adapter.clone());

        assert!(observer.contains(id));
        assert_eq!(observer.len(), 1);
        assert_eq!(adapter.borrow().link.as_ref().map(ObserverLink::id), Some(id));
    }

    #[test]
    fn test_adapter_registered_once() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));

        let id = observer.add_monitor_adapter(adapter.clone());
        assert_eq!(observer.add_monitor_adapter(adapter.clone()), id);
        assert_eq!(observer.len(), 1);
        assert_eq!(adapter.borrow().link.as_ref().map(ObserverLink::id), Some(id));

        observer.notify(&reading("1", "2"));
        assert_eq!(adapter.borrow().calls.len(), 3);

        adapter.borrow_mut().dispose_myself();
        assert!(observer.is_empty());
    }

    #[test]
    fn test_notify_calls_in_order() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        observer.add_monitor_adapter(adapter.clone());

        observer.notify(&reading("12.5", "0.2"));

        assert_eq!(
            adapter.borrow().calls,
            ["temperature 12.5", "rainfall 0.2", "updated 01/01/2024 00:00:00"]
        );
    }

    #[test]
    fn test_notify_reaches_every_adapter() {
        let observer = LocationObserver::new("Melbourne");
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let first_id = observer.add_monitor_adapter(first.clone());
        let second_id = observer.add_monitor_adapter(second.clone());

        assert_ne!(first_id, second_id);

        observer.notify(&reading("1", "2"));

        assert_eq!(first.borrow().calls.len(), 3);
        assert_eq!(second.borrow().calls.len(), 3);
    }

    #[test]
    fn test_removed_adapter_is_not_notified() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        let id = observer.add_monitor_adapter(adapter.clone());

        assert!(observer.remove_monitor_adapter(id));
        assert!(!observer.remove_monitor_adapter(id));
        assert!(observer.is_empty());

        observer.notify(&reading("1", "2"));
        assert!(adapter.borrow().calls.is_empty());
    }

    #[test]
    fn test_adapter_can_dispose_during_notify() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        let id = observer.add_monitor_adapter(adapter.clone());

        observer.notify(&reading("1", "stop"));
        assert!(!observer.contains(id));

        observer.notify(&reading("2", "3"));
        assert_eq!(adapter.borrow().calls.len(), 3);
    }

    #[test]
    fn test_link_outlives_observer() {
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        observer.add_monitor_adapter(adapter.clone());
        drop(observer);

        let link = adapter.borrow().link.clone().unwrap();
        assert!(!link.remove());
    }

    #[test]
    fn test_refresh_from_source() {
        let source = crate::weather::DummyWeatherSource::new().unwrap();
        let observer = LocationObserver::new("Melbourne");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        observer.add_monitor_adapter(adapter.clone());

        observer.refresh(&source).unwrap();

        assert_eq!(adapter.borrow().calls[0], "temperature 14.2");
    }

    #[test]
    fn test_refresh_error_notifies_nobody() {
        let source = crate::weather::DummyWeatherSource::new().unwrap();
        let observer = LocationObserver::new("Atlantis");
        let adapter = Rc::new(RefCell::new(Recorder::default()));
        observer.add_monitor_adapter(adapter.clone());

        assert!(observer.refresh(&source).is_err());
        assert!(adapter.borrow().calls.is_empty());
    }
}
