pub mod booking;
pub mod counselor;
pub mod slot;

pub use booking::{BookingForm, BookingRequest, BookingSummary, SessionType, CURRENCY};
pub use counselor::{CatalogError, Counselor, CounselorCatalog};
pub use slot::{generate_full_time_slots, SelectOption};
