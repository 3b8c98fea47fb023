use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// How many recommendations the main list shows
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// How many entries the alternative-recommendations list shows
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,
}

fn default_max_recommendations() -> usize {
    5
}

fn default_max_alternatives() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            max_alternatives: default_max_alternatives(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.max_recommendations, 5);
        assert_eq!(config.max_alternatives, 3);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars = vec![("MAX_RECOMMENDATIONS".to_string(), "10".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.max_recommendations, 10);
        assert_eq!(config.max_alternatives, 3);
    }
}
