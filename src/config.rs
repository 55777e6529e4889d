use std::env;
use anyhow::{Context, Result, bail};

/// Which record store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "spanner" => Ok(StoreBackend::Spanner),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("STORE_BACKEND must be one of: spanner, memory, got '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub spanner_emulator_host: Option<String>,
    pub spanner_project: String,
    pub spanner_instance: String,
    pub spanner_database: String,
    pub spanner_table: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => StoreBackend::parse(&value)?,
            None => StoreBackend::Spanner,
        };

        let spanner_emulator_host = lookup("SPANNER_EMULATOR_HOST");

        // The memory backend never talks to Spanner, so its settings are optional there
        let required = |key: &str| -> Result<String> {
            match (lookup(key), store_backend) {
                (Some(value), _) => Ok(value),
                (None, StoreBackend::Memory) => Ok(String::new()),
                (None, StoreBackend::Spanner) => {
                    Err(anyhow::anyhow!("{} environment variable is required", key))
                }
            }
        };

        let spanner_project = required("SPANNER_PROJECT")?;
        let spanner_instance = required("SPANNER_INSTANCE")?;
        let spanner_database = required("SPANNER_DATABASE")?;

        let spanner_table = lookup("SPANNER_TABLE").unwrap_or_else(|| "Customer".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            spanner_emulator_host,
            spanner_project,
            spanner_instance,
            spanner_database,
            spanner_table,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        if self.store_backend == StoreBackend::Spanner {
            tracing::info!("  Spanner emulator: {}",
                self.spanner_emulator_host.as_deref().unwrap_or("disabled (using production)"));
            tracing::info!("  Spanner project: {}", self.spanner_project);
            tracing::info!("  Spanner instance: {}", self.spanner_instance);
            tracing::info!("  Spanner database: {}", self.spanner_database);
            tracing::info!("  Spanner table: {}", self.spanner_table);
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("SPANNER_PROJECT", "test-project"),
        ("SPANNER_INSTANCE", "test-instance"),
        ("SPANNER_DATABASE", "test-database"),
    ];

    #[test]
    fn test_config_with_all_vars() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("STORE_BACKEND", "spanner"),
            ("SPANNER_EMULATOR_HOST", "localhost:9010"),
            ("SPANNER_TABLE", "Clients"),
            ("SERVICE_PORT", "3000"),
            ("SERVICE_HOST", "127.0.0.1"),
        ]);

        let config = config_from(&vars).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Spanner);
        assert_eq!(config.spanner_emulator_host, Some("localhost:9010".to_string()));
        assert_eq!(config.spanner_project, "test-project");
        assert_eq!(config.spanner_instance, "test-instance");
        assert_eq!(config.spanner_database, "test-database");
        assert_eq!(config.spanner_table, "Clients");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&REQUIRED).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Spanner);
        assert_eq!(config.spanner_emulator_host, None);
        assert_eq!(config.spanner_table, "Customer");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_missing_required_var() {
        let result = config_from(&[
            ("SPANNER_PROJECT", "test-project"),
            ("SPANNER_INSTANCE", "test-instance"),
        ]);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SPANNER_DATABASE"));
    }

    #[test]
    fn test_memory_backend_needs_no_spanner_settings() {
        let config = config_from(&[("STORE_BACKEND", "memory")]).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.spanner_project.is_empty());
    }

    #[test]
    fn test_unknown_backend() {
        let result = config_from(&[("STORE_BACKEND", "dynamo")]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("STORE_BACKEND"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SERVICE_PORT", "not-a-number"));

        let result = config_from(&vars);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SERVICE_PORT", "99999"));

        let result = config_from(&vars);
        assert!(result.is_err());
    }
}
