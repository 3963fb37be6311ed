//! Adapters implementing domain ports.
//!
//! Stock [`crate::ports::SearchObserver`] implementations live here; the
//! search engines depend only on the port.

pub mod observers;

pub use observers::{Chain, Deadline, ExpansionLimit, NoopObserver, VisitLog, VisitRecord};
