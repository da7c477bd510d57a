use serde::{Deserialize, Serialize};

pub const FIRST_HOUR: u32 = 9;
pub const LAST_HOUR: u32 = 18;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn labelled(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// Every bookable hour of the day, "09:00" through "18:00".
pub fn generate_full_time_slots() -> Vec<String> {
    (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}
