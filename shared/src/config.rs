use std::{env, path::Path};

use anyhow::{Context, Result, ensure};

/// Default upstream: the completion proxy's metrics API on its standard port.
const DEFAULT_METRICS_BASE_URL: &str = "http://127.0.0.1:8002";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

pub struct Settings {
    /// Base URL of the completion proxy exposing `/completion_requests`
    pub metrics_base_url: String,
    /// Address the dashboard server binds to
    pub bind_addr: String,
    /// Seconds between polls of the upstream record list
    pub poll_interval_secs: u64,
}

impl Settings {
    pub fn load(manifest_dir: &Path) -> Result<Self> {
        // A .env next to the manifest is an optional set of overrides
        #[cfg(debug_assertions)]
        let _ = dotenvy::from_path(manifest_dir.join(".env"));
        #[cfg(not(debug_assertions))]
        let _ = manifest_dir;

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .context("POLL_INTERVAL_SECS must be a whole number of seconds")?;
                // A zero period would panic the interval timer driving the poll loop
                ensure!(secs > 0, "POLL_INTERVAL_SECS must be at least 1");
                secs
            }
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            metrics_base_url: env::var("METRICS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_METRICS_BASE_URL.to_owned()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
            poll_interval_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers every POLL_INTERVAL_SECS case so no other test observes
    // the variable mid-change
    #[test]
    fn poll_interval_must_be_a_positive_number() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

        unsafe { env::set_var("POLL_INTERVAL_SECS", "0") };
        assert!(Settings::load(manifest_dir).is_err());

        unsafe { env::set_var("POLL_INTERVAL_SECS", "soon") };
        assert!(Settings::load(manifest_dir).is_err());

        unsafe { env::set_var("POLL_INTERVAL_SECS", "45") };
        let settings = Settings::load(manifest_dir).unwrap();
        assert_eq!(settings.poll_interval_secs, 45);

        unsafe { env::remove_var("POLL_INTERVAL_SECS") };
        let settings = Settings::load(manifest_dir).unwrap();
        assert_eq!(settings.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    }
}
