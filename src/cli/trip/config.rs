use std::env;

use crate::groq_client::DEFAULT_BASE_URL;
use crate::planner::completion::DEFAULT_MODEL_ID;
use crate::planner::{CompletionConfig, PlannerError};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";

/// Values given on the command line. Anything left out falls back to the
/// environment, then to the built-in defaults.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug)]
pub struct PlannerSettings {
    pub completion: CompletionConfig,
    pub base_url: String,
}

impl PlannerSettings {
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, PlannerError> {
        Self::resolve(overrides, |name| env::var(name).ok())
    }

    fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PlannerError> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = non_empty(overrides.api_key)
            .or_else(|| non_empty(lookup(API_KEY_VAR)))
            .ok_or_else(|| {
                PlannerError::Credential(format!("{} environment variable not set", API_KEY_VAR))
            })?;

        let model_id = non_empty(overrides.model)
            .or_else(|| non_empty(lookup(MODEL_VAR)))
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let base_url = non_empty(overrides.base_url)
            .or_else(|| non_empty(lookup(BASE_URL_VAR)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut completion = CompletionConfig::new(api_key);
        completion.model_id = model_id;
        if let Some(temperature) = overrides.temperature {
            completion.temperature = temperature;
        }

        Ok(Self { completion, base_url })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_from_environment_key() {
        let settings =
            PlannerSettings::resolve(ConfigOverrides::default(), env_of(&[(API_KEY_VAR, "gsk_env")]))
                .unwrap();

        assert_eq!(settings.completion.api_key, "gsk_env");
        assert_eq!(settings.completion.model_id, "llama-3.3-70b-versatile");
        assert_eq!(settings.completion.temperature, 0.0);
        assert_eq!(settings.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_flags_win_over_environment() {
        let overrides = ConfigOverrides {
            api_key: Some("gsk_flag".to_string()),
            model: Some("llama-3.1-8b-instant".to_string()),
            base_url: Some("http://localhost:9000".to_string()),
            temperature: Some(0.7),
        };
        let env = env_of(&[
            (API_KEY_VAR, "gsk_env"),
            (MODEL_VAR, "env-model"),
            (BASE_URL_VAR, "http://env"),
        ]);

        let settings = PlannerSettings::resolve(overrides, env).unwrap();

        assert_eq!(settings.completion.api_key, "gsk_flag");
        assert_eq!(settings.completion.model_id, "llama-3.1-8b-instant");
        assert_eq!(settings.completion.temperature, 0.7);
        assert_eq!(settings.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_environment_model_and_base_url() {
        let env = env_of(&[
            (API_KEY_VAR, "gsk_env"),
            (MODEL_VAR, "env-model"),
            (BASE_URL_VAR, "http://env"),
        ]);

        let settings = PlannerSettings::resolve(ConfigOverrides::default(), env).unwrap();

        assert_eq!(settings.completion.model_id, "env-model");
        assert_eq!(settings.base_url, "http://env");
    }

    #[test]
    fn test_missing_key_is_credential_error() {
        let cases = vec![env_of(&[]), env_of(&[(API_KEY_VAR, "   ")])];

        for env in cases {
            let err = PlannerSettings::resolve(ConfigOverrides::default(), env).unwrap_err();
            assert!(matches!(err, PlannerError::Credential(ref msg) if msg.contains(API_KEY_VAR)));
        }
    }
}
