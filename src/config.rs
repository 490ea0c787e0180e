use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::school::SchoolBuilder;

/// The env vars that identify the school to query.
#[derive(Debug, Deserialize)]
pub struct SchoolEnv {
    school_type: String,
    school_region: String,
    school_code: String,
}

pub struct SchoolConfig {
    school_type: String,
    school_region: String,
    school_code: String,
}

impl SchoolConfig {
    pub fn new() -> anyhow::Result<Self> {
        let school_env = SchoolEnv::load_from_env()?;
        Ok(Self::from(school_env))
    }

    /// Names are resolved against the catalogs only when the builder runs.
    pub fn school_builder(&self) -> SchoolBuilder {
        SchoolBuilder::new()
            .school_type_name(&self.school_type)
            .region_name(&self.school_region)
            .code(&self.school_code)
    }
}

impl From<SchoolEnv> for SchoolConfig {
    fn from(env: SchoolEnv) -> Self {
        Self {
            school_type: env.school_type,
            school_region: env.school_region,
            school_code: env.school_code,
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
