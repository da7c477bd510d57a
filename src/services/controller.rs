use std::sync::Arc;

use serde::Serialize;

use crate::errors::BookingError;
use crate::models::{
    generate_full_time_slots, BookingForm, BookingRequest, BookingSummary, CounselorCatalog,
    SelectOption,
};
use crate::services::{pricing, validation};

/// Slot selector contents after the counselor changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotOptions {
    pub options: Vec<SelectOption>,
    pub selected: String,
}

/// Slot selector state after the user picks a slot. An empty `slot` means
/// the selection was cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSelection {
    pub slot: String,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeAnnotation {
    pub age: String,
    pub minor: bool,
}

impl AgeAnnotation {
    pub fn note(&self) -> &'static str {
        if self.minor {
            " (Minor)"
        } else {
            ""
        }
    }
}

/// Form logic for the booking page, independent of how events arrive.
#[derive(Debug, Clone)]
pub struct BookingController {
    catalog: Arc<CounselorCatalog>,
}

impl BookingController {
    pub fn new(catalog: Arc<CounselorCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CounselorCatalog {
        &self.catalog
    }

    pub fn counselor_options(&self) -> Vec<SelectOption> {
        self.catalog
            .counselors()
            .iter()
            .map(|c| SelectOption::labelled(&c.name))
            .collect()
    }

    /// The whole day, whatever counselor is chosen.
    pub fn slot_options(&self) -> Vec<SelectOption> {
        generate_full_time_slots()
            .iter()
            .map(|s| SelectOption::labelled(s))
            .collect()
    }

    pub fn on_counselor_change(&self, counselor: &str) -> SlotOptions {
        tracing::debug!(counselor = %counselor, "counselor changed, resetting slots");
        SlotOptions {
            options: self.slot_options(),
            selected: String::new(),
        }
    }

    pub fn on_slot_change(&self, counselor: &str, slot: &str) -> SlotSelection {
        let Some(c) = self.catalog.find(counselor) else {
            return SlotSelection {
                slot: slot.to_string(),
                warning: None,
            };
        };

        if c.offers(slot) {
            return SlotSelection {
                slot: slot.to_string(),
                warning: None,
            };
        }

        tracing::info!(counselor = %c.name, slot = %slot, "slot not offered, clearing selection");
        SlotSelection {
            slot: String::new(),
            warning: Some(format!(
                "{slot} is not available for {}. Please choose a different slot.",
                c.name
            )),
        }
    }

    pub fn on_age_input(&self, raw: &str) -> AgeAnnotation {
        let age = validation::strip_non_digits(raw);
        let minor = validation::is_minor(validation::parse_leading_int(&age));
        AgeAnnotation { age, minor }
    }

    pub fn on_submit(&self, form: &BookingForm) -> Result<BookingSummary, BookingError> {
        match self.validate(form) {
            Ok(request) => {
                let cost = pricing::calculate_cost(&request.session_type, &request.duration);
                tracing::info!(
                    counselor = %request.counselor,
                    slot = %request.slot,
                    session_type = %request.session_type,
                    cost,
                    "booking accepted"
                );
                Ok(BookingSummary::new(request, cost))
            }
            Err(e) => {
                tracing::info!(kind = e.kind(), "booking rejected");
                Err(e)
            }
        }
    }

    fn validate(&self, form: &BookingForm) -> Result<BookingRequest, BookingError> {
        validation::check_complete(form)?;
        let age_years = validation::validate_age(&form.age)?;
        validation::validate_email(&form.email)?;
        validation::validate_phone(&form.phone)?;

        let offered = self
            .catalog
            .find(&form.counselor)
            .is_some_and(|c| c.offers(&form.slot));
        if !offered {
            return Err(BookingError::SlotUnavailable {
                counselor: form.counselor.clone(),
                slot: form.slot.clone(),
            });
        }

        Ok(BookingRequest {
            name: form.name.clone(),
            age: form.age.clone(),
            age_years,
            phone: form.phone.clone(),
            email: form.email.clone(),
            date: form.date.clone(),
            slot: form.slot.clone(),
            session_type: form.session_type.clone(),
            duration: form.duration.clone(),
            counselor: form.counselor.clone(),
        })
    }
}
