use serde::{Deserialize, Serialize};

pub const CURRENCY: &str = "NGN";

/// The raw form fields exactly as the page sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub slot: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub duration: String,
    pub counselor: String,
}

impl BookingForm {
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("name", self.name.as_str()),
            ("age", self.age.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("date", self.date.as_str()),
            ("slot", self.slot.as_str()),
            ("type", self.session_type.as_str()),
            ("duration", self.duration.as_str()),
            ("counselor", self.counselor.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Individual,
    Couples,
    Family,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Individual => "Individual",
            SessionType::Couples => "Couples",
            SessionType::Family => "Family",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Individual" => Some(SessionType::Individual),
            "Couples" => Some(SessionType::Couples),
            "Family" => Some(SessionType::Family),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            SessionType::Individual => 1.0,
            SessionType::Couples => 1.5,
            SessionType::Family => 2.0,
        }
    }
}

/// A submission that passed every check. Text fields stay verbatim, the age
/// included; `age_years` is its numeric reading, `None` when it overflows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub age: String,
    #[serde(skip)]
    pub age_years: Option<u64>,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub slot: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub duration: String,
    pub counselor: String,
}

impl BookingRequest {
    pub fn is_minor(&self) -> bool {
        matches!(self.age_years, Some(n) if n < 18)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub request: BookingRequest,
    pub cost: f64,
    pub currency: &'static str,
    pub minor: bool,
}

impl BookingSummary {
    pub fn new(request: BookingRequest, cost: f64) -> Self {
        let minor = request.is_minor();
        Self {
            request,
            cost,
            currency: CURRENCY,
            minor,
        }
    }

    /// "NGN 15000.00"; a non-numeric cost renders as "NGN NaN" and an
    /// unbounded one as "NGN Infinity".
    pub fn cost_display(&self) -> String {
        if self.cost.is_infinite() {
            let sign = if self.cost < 0.0 { "-" } else { "" };
            return format!("{} {sign}Infinity", self.currency);
        }
        format!("{} {:.2}", self.currency, self.cost)
    }
}
