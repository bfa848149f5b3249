use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub primary_key: String,
    pub aws_region: String,
    pub dynamo_endpoint: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let table_name = env::var("DDB_TABLE")
            .context("DDB_TABLE environment variable is required")?;

        let primary_key = env::var("DDB_PRIMARY_KEY")
            .unwrap_or_else(|_| "id".to_string());

        let aws_region = env::var("AWS_REGION")
            .unwrap_or_else(|_| "us-west-2".to_string());

        let dynamo_endpoint = env::var("DDB_ENDPOINT").ok();

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            table_name,
            primary_key,
            aws_region,
            dynamo_endpoint,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!("  Primary key attribute: {}", self.primary_key);
        tracing::info!("  AWS region: {}", self.aws_region);
        tracing::info!("  DynamoDB endpoint: {}",
            self.dynamo_endpoint.as_deref().unwrap_or("default (AWS)"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; config tests must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DDB_TABLE");
            env::remove_var("DDB_PRIMARY_KEY");
            env::remove_var("AWS_REGION");
            env::remove_var("DDB_ENDPOINT");
            env::remove_var("PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("DDB_TABLE", "items");
            env::set_var("DDB_PRIMARY_KEY", "item_id");
            env::set_var("AWS_REGION", "eu-central-1");
            env::set_var("DDB_ENDPOINT", "http://localhost:8000");
            env::set_var("PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.table_name, "items");
        assert_eq!(config.primary_key, "item_id");
        assert_eq!(config.aws_region, "eu-central-1");
        assert_eq!(config.dynamo_endpoint, Some("http://localhost:8000".to_string()));
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");

        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("DDB_TABLE", "items");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.table_name, "items");
        assert_eq!(config.primary_key, "id");
        assert_eq!(config.aws_region, "us-west-2");
        assert_eq!(config.dynamo_endpoint, None);
        assert_eq!(config.service_port, 4000);
        assert_eq!(config.service_host, "0.0.0.0");

        clear_env_vars();
    }

    #[test]
    fn test_missing_required_table() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        // DDB_TABLE deliberately unset

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("DDB_TABLE"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("DDB_TABLE", "items");
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));

        clear_env_vars();
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("DDB_TABLE", "items");
            env::set_var("PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }
}
