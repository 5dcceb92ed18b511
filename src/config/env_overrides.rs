use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` as the variable source.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty("WARGATE_API_KEY").or_else(|| non_empty("OPENAI_API_KEY")) {
            self.api_key = Some(key);
        }

        if let Some(model) = non_empty("WARGATE_MODEL") {
            self.model = model;
        }

        if let Some(url) = non_empty("WARGATE_BASE_URL") {
            self.base_url = url;
        }

        if let Some(temp_str) = non_empty("WARGATE_TEMPERATURE")
            && let Ok(temp) = temp_str.trim().parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = temp;
        }

        if let Some(seed_str) = non_empty("WARGATE_PERSONA_SEED")
            && let Ok(seed) = seed_str.trim().parse::<u64>()
        {
            self.persona_seed = Some(seed);
        }

        if let Some(key) = non_empty("GEMINI_API_KEY") {
            self.image.api_key = Some(key);
        }

        if let Some(dir) = non_empty("WARGATE_LOG_DIR") {
            self.output.log_dir = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn openai_key_is_picked_up() {
        let mut config = Config::default();
        config.apply_overrides_from(lookup(&[("OPENAI_API_KEY", "sk-test")]));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn wargate_key_wins_over_openai_key() {
        let mut config = Config::default();
        config.apply_overrides_from(lookup(&[
            ("OPENAI_API_KEY", "sk-openai"),
            ("WARGATE_API_KEY", "sk-wargate"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("sk-wargate"));
    }

    #[test]
    fn invalid_temperature_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides_from(lookup(&[("WARGATE_TEMPERATURE", "7.5")]));
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);

        config.apply_overrides_from(lookup(&[("WARGATE_TEMPERATURE", "0.3")]));
        assert!((config.temperature - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn seed_and_image_key() {
        let mut config = Config::default();
        config.apply_overrides_from(lookup(&[
            ("WARGATE_PERSONA_SEED", "42"),
            ("GEMINI_API_KEY", "g-key"),
        ]));
        assert_eq!(config.persona_seed, Some(42));
        assert_eq!(config.image.api_key.as_deref(), Some("g-key"));
    }

    #[test]
    fn blank_values_do_not_override() {
        let mut config = Config {
            api_key: Some("keep".into()),
            ..Config::default()
        };
        config.apply_overrides_from(lookup(&[("OPENAI_API_KEY", "   ")]));
        assert_eq!(config.api_key.as_deref(), Some("keep"));
    }
}
