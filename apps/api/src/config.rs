use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default; the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated processing latency for resume analysis, in milliseconds.
    pub resume_processing_ms: u64,
    /// Simulated processing latency for job posting analysis, in milliseconds.
    pub job_processing_ms: u64,
    /// Load the demo dataset at startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            resume_processing_ms: env_or("RESUME_PROCESSING_MS", "2000")
                .parse::<u64>()
                .context("RESUME_PROCESSING_MS must be an integer")?,
            job_processing_ms: env_or("JOB_PROCESSING_MS", "1500")
                .parse::<u64>()
                .context("JOB_PROCESSING_MS must be an integer")?,
            seed_demo_data: env_or("SEED_DEMO_DATA", "true")
                .parse::<bool>()
                .context("SEED_DEMO_DATA must be true or false")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
