// Pattern: Observer
// Subscribers register with a subject and are told about every change.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::transcript::Transcript;

pub trait WeatherObserver {
    fn update(&self, temperature: f64);
}

#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<Rc<dyn WeatherObserver>>,
    temperature: f64,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn WeatherObserver>) {
        self.observers.push(observer);
    }

    /// Removes by identity, not by value.
    pub fn remove_observer(&mut self, observer: &Rc<dyn WeatherObserver>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
        self.notify_observers();
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    fn notify_observers(&self) {
        debug!(observers = self.observers.len(), temperature = self.temperature, "notify");
        for observer in &self.observers {
            observer.update(self.temperature);
        }
    }
}

#[derive(Default)]
pub struct TemperatureDisplay {
    readings: RefCell<Vec<String>>,
}

impl TemperatureDisplay {
    pub fn readings(&self) -> Vec<String> {
        self.readings.borrow().clone()
    }
}

impl WeatherObserver for TemperatureDisplay {
    fn update(&self, temperature: f64) {
        self.readings
            .borrow_mut()
            .push(format!("Temperature updated: {temperature}°C"));
    }
}

pub fn demo(out: &mut Transcript) {
    let mut station = WeatherStation::new();
    let display = Rc::new(TemperatureDisplay::default());
    let observer: Rc<dyn WeatherObserver> = display.clone();

    station.add_observer(Rc::clone(&observer));
    station.set_temperature(25.0);
    station.set_temperature(36.0);

    station.remove_observer(&observer);
    station.set_temperature(40.0);

    for reading in display.readings() {
        out.line(reading);
    }
    out.line(format!(
        "Station at {}°C with {} observers",
        station.temperature(),
        station.observer_count()
    ));
}
