use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counselor {
    pub name: String,
    pub slots: Vec<String>,
}

impl Counselor {
    pub fn new(name: &str, slots: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn offers(&self, slot: &str) -> bool {
        self.slots.iter().any(|s| s == slot)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("counselor name must not be empty")]
    EmptyName,

    #[error("duplicate counselor: {0}")]
    DuplicateCounselor(String),

    #[error("invalid slot label {slot:?} for {counselor}")]
    InvalidSlot { counselor: String, slot: String },

    #[error("duplicate slot {slot} for {counselor}")]
    DuplicateSlot { counselor: String, slot: String },
}

/// Immutable set of counselors, built once at startup and shared by the
/// controller. Order is the display order of the counselor selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounselorCatalog {
    counselors: Vec<Counselor>,
}

impl Default for CounselorCatalog {
    fn default() -> Self {
        Self {
            counselors: vec![
                Counselor::new("Dr Shelby McGraw", &["09:00", "10:00", "11:00"]),
                Counselor::new("Prof Ben Smith", &["12:00", "13:00", "14:00"]),
                Counselor::new("Dr Harrison Ford", &["15:00", "16:00", "17:00"]),
            ],
        }
    }
}

impl CounselorCatalog {
    pub fn new(counselors: Vec<Counselor>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for counselor in &counselors {
            if counselor.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !names.insert(counselor.name.as_str()) {
                return Err(CatalogError::DuplicateCounselor(counselor.name.clone()));
            }

            let mut seen = HashSet::new();
            for slot in &counselor.slots {
                if !is_hour_label(slot) {
                    return Err(CatalogError::InvalidSlot {
                        counselor: counselor.name.clone(),
                        slot: slot.clone(),
                    });
                }
                if !seen.insert(slot.as_str()) {
                    return Err(CatalogError::DuplicateSlot {
                        counselor: counselor.name.clone(),
                        slot: slot.clone(),
                    });
                }
            }
        }
        Ok(Self { counselors })
    }

    pub fn from_json(s: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct Raw {
            counselors: Vec<Counselor>,
        }

        let raw: Raw = serde_json::from_str(s)?;
        Self::new(raw.counselors)
    }

    pub fn counselors(&self) -> &[Counselor] {
        &self.counselors
    }

    /// Exact, case-sensitive name match.
    pub fn find(&self, name: &str) -> Option<&Counselor> {
        self.counselors.iter().find(|c| c.name == name)
    }
}

/// "HH:00" with HH in 00..=23.
pub fn is_hour_label(s: &str) -> bool {
    let Some((hour, minute)) = s.split_once(':') else {
        return false;
    };
    if hour.len() != 2 || minute != "00" || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    hour.parse::<u32>().map(|h| h <= 23).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = CounselorCatalog::default();
        assert_eq!(catalog.counselors().len(), 3);
        assert_eq!(catalog.counselors()[0].name, "Dr Shelby McGraw");
        assert!(catalog.find("Prof Ben Smith").unwrap().offers("13:00"));
        assert!(!catalog.find("Prof Ben Smith").unwrap().offers("09:00"));
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = CounselorCatalog::default();
        assert!(catalog.find("dr shelby mcgraw").is_none());
        assert!(catalog.find("Dr Shelby McGraw ").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"counselors":[{"name":"Dr A","slots":["08:00","19:00"]}]}"#;
        let catalog = CounselorCatalog::from_json(json).unwrap();
        assert_eq!(catalog.counselors().len(), 1);
        assert_eq!(catalog.counselors()[0].slots, vec!["08:00", "19:00"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            CounselorCatalog::from_json("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_counselor() {
        let json = r#"{"counselors":[{"name":"Dr A","slots":[]},{"name":"Dr A","slots":[]}]}"#;
        assert!(matches!(
            CounselorCatalog::from_json(json),
            Err(CatalogError::DuplicateCounselor(_))
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let json = r#"{"counselors":[{"name":"","slots":["09:00"]}]}"#;
        assert!(matches!(
            CounselorCatalog::from_json(json),
            Err(CatalogError::EmptyName)
        ));
    }

    #[test]
    fn test_rejects_bad_slot() {
        for slot in ["9:00", "09:30", "24:00", "ab:00", "0900"] {
            let json = format!(r#"{{"counselors":[{{"name":"Dr A","slots":["{slot}"]}}]}}"#);
            assert!(
                matches!(
                    CounselorCatalog::from_json(&json),
                    Err(CatalogError::InvalidSlot { .. })
                ),
                "{slot} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_slot() {
        let json = r#"{"counselors":[{"name":"Dr A","slots":["09:00","09:00"]}]}"#;
        assert!(matches!(
            CounselorCatalog::from_json(json),
            Err(CatalogError::DuplicateSlot { .. })
        ));
    }
}
