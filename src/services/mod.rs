pub mod calendar;
pub mod controller;
pub mod pricing;
pub mod summary;
pub mod validation;

pub use controller::{AgeAnnotation, BookingController, SlotOptions, SlotSelection};
