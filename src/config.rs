use std::env;

use anyhow::Context;

use crate::models::CounselorCatalog;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub counselors_path: Option<String>,
    pub business_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            counselors_path: env::var("COUNSELORS_PATH").ok().filter(|p| !p.is_empty()),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Counselling Centre".to_string()),
        }
    }

    /// The configured catalog file, or the built-in counselors when none is set.
    pub fn load_catalog(&self) -> anyhow::Result<CounselorCatalog> {
        let Some(path) = &self.counselors_path else {
            return Ok(CounselorCatalog::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read counselor catalog {path}"))?;
        let catalog = CounselorCatalog::from_json(&raw)
            .with_context(|| format!("invalid counselor catalog {path}"))?;
        Ok(catalog)
    }
}
