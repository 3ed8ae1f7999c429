use serde::Deserialize;
use std::env;

use access_core::GateRoutes;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub redis: RedisConfig,
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub login_route: String,
    pub forbidden_route: String,
}

impl From<&RouteConfig> for GateRoutes {
    fn from(routes: &RouteConfig) -> Self {
        GateRoutes {
            login_route: routes.login_route.clone(),
            forbidden_route: routes.forbidden_route.clone(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str.parse().map_err(|e: String| anyhow::anyhow!(e))?;

        let is_prod = environment == Environment::Prod;

        let config = StoreConfig {
            environment,
            service_name: get_env("SERVICE_NAME", Some("session-store"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            redis: RedisConfig {
                url: get_env("REDIS_URL", Some("redis://127.0.0.1:6379"), is_prod)?,
            },
            routes: RouteConfig {
                login_route: get_env("LOGIN_ROUTE", Some("/login"), is_prod)?,
                forbidden_route: get_env("FORBIDDEN_ROUTE", Some("/forbidden"), is_prod)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        for (name, route) in [
            ("LOGIN_ROUTE", &self.routes.login_route),
            ("FORBIDDEN_ROUTE", &self.routes.forbidden_route),
        ] {
            if !route.starts_with('/') {
                return Err(anyhow::anyhow!("{} must be an absolute path", name));
            }
        }

        if self.redis.url.is_empty() {
            return Err(anyhow::anyhow!("REDIS_URL must not be empty"));
        }

        Ok(())
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, anyhow::Error> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(anyhow::anyhow!(format!("{} is required but not set", key)))
            }
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> StoreConfig {
        StoreConfig {
            environment: Environment::Dev,
            service_name: "session-store".to_string(),
            log_level: "info".to_string(),
            redis: RedisConfig {
                url: "redis://127.0.0.1:6379".to_string(),
            },
            routes: RouteConfig {
                login_route: "/login".to_string(),
                forbidden_route: "/forbidden".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_route() {
        let mut config = sample_config();
        config.routes.login_route = "login".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_redis_url() {
        let mut config = sample_config();
        config.redis.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gate_routes_from_route_config() {
        let config = sample_config();
        let routes = GateRoutes::from(&config.routes);
        assert_eq!(routes.login_route, "/login");
        assert_eq!(routes.forbidden_route, "/forbidden");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Prod));
        assert!("staging".parse::<Environment>().is_err());
    }
}
