// crates/excerpt_config/src/lib.rs

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Thresholds driving the excerpt heuristic, composed from built-in
/// defaults plus optional `MORE_TAG_*` environment overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct ExcerptConfig {
    /// Only posts with this layout are touched.
    pub layout: String,
    /// Trimmed content shorter than this is left alone.
    pub min_length: usize,
    /// Trimmed content at or below this length is shown in full.
    pub full_length: usize,
    /// A first paragraph shorter than this pulls the cut after paragraph two.
    pub short_paragraph: usize,
    /// Upper bound for the cut when the post has no paragraph breaks.
    pub fallback_cut: usize,
    /// Share of the content used for the fallback cut and the clamp.
    pub cut_ratio: f64,
    /// Mirrors `MORE_TAG_DISABLE`; a disabled hook passes posts through.
    pub enabled: bool,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            layout: "post".to_string(),
            min_length: 50,
            full_length: 300,
            short_paragraph: 100,
            fallback_cut: 300,
            cut_ratio: 0.6,
            enabled: true,
        }
    }
}

impl ExcerptConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, starting from
    /// the defaults and overriding whatever the lookup returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(layout) = lookup("MORE_TAG_LAYOUT") {
            config.layout = layout.trim().to_string();
        }
        if let Some(value) = parse_var(&lookup, "MORE_TAG_MIN_LENGTH")? {
            config.min_length = value;
        }
        if let Some(value) = parse_var(&lookup, "MORE_TAG_FULL_LENGTH")? {
            config.full_length = value;
        }
        if let Some(value) = parse_var(&lookup, "MORE_TAG_SHORT_PARAGRAPH")? {
            config.short_paragraph = value;
        }
        if let Some(value) = parse_var(&lookup, "MORE_TAG_FALLBACK_CUT")? {
            config.fallback_cut = value;
        }
        if let Some(ratio) = parse_var::<f64, _>(&lookup, "MORE_TAG_CUT_RATIO")? {
            if !(0.0..=1.0).contains(&ratio) {
                anyhow::bail!("MORE_TAG_CUT_RATIO must be between 0 and 1, got {}", ratio);
            }
            config.cut_ratio = ratio;
        }
        if lookup("MORE_TAG_DISABLE").is_some() {
            config.enabled = false;
        }

        log::debug!("excerpt config: {:?}", config);
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {}: '{}'", key, raw))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExcerptConfig::default();
        assert_eq!(config.layout, "post");
        assert_eq!(config.min_length, 50);
        assert_eq!(config.full_length, 300);
        assert_eq!(config.short_paragraph, 100);
        assert_eq!(config.fallback_cut, 300);
        assert_eq!(config.cut_ratio, 0.6);
        assert!(config.enabled);
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let config = ExcerptConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ExcerptConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = ExcerptConfig::from_lookup(lookup_from(&[
            ("MORE_TAG_LAYOUT", "article"),
            ("MORE_TAG_MIN_LENGTH", "10"),
            ("MORE_TAG_FULL_LENGTH", " 500 "),
            ("MORE_TAG_SHORT_PARAGRAPH", "80"),
            ("MORE_TAG_FALLBACK_CUT", "200"),
            ("MORE_TAG_CUT_RATIO", "0.5"),
        ]))
        .unwrap();
        assert_eq!(config.layout, "article");
        assert_eq!(config.min_length, 10);
        assert_eq!(config.full_length, 500);
        assert_eq!(config.short_paragraph, 80);
        assert_eq!(config.fallback_cut, 200);
        assert_eq!(config.cut_ratio, 0.5);
        assert!(config.enabled);
    }

    #[test]
    fn test_disable_flag() {
        let config = ExcerptConfig::from_lookup(lookup_from(&[("MORE_TAG_DISABLE", "1")])).unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn test_invalid_number_names_variable() {
        let err = ExcerptConfig::from_lookup(lookup_from(&[("MORE_TAG_MIN_LENGTH", "fifty")]))
            .unwrap_err();
        assert!(err.to_string().contains("MORE_TAG_MIN_LENGTH"));
    }

    #[test]
    fn test_ratio_out_of_range() {
        let result = ExcerptConfig::from_lookup(lookup_from(&[("MORE_TAG_CUT_RATIO", "1.5")]));
        assert!(result.is_err());
    }
}
