mod classifier;
mod core;
mod messages;
mod observer;
mod registry;
mod scheduler;
mod status;

pub mod resolver;

pub use self::core::WardenEngine;

pub use classifier::RestrictionClassifier;
pub use observer::{EngineObserver, LogObserver};
pub use registry::{CategoryRegistry, RegistryError};
pub use scheduler::{DayNightScheduler, GateTransition};
pub use status::{MonitorStatus, StatusPresenter};
