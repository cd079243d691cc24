use contracts::enums::Locale;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub transition: TransitionConfig,
    pub scroll: ScrollConfig,
    pub carousel: CarouselConfig,
    pub i18n: I18nConfig,
    pub contact: ContactConfig,
}

/// Cross-fade timing, in milliseconds.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub exit_ms: f64,
    pub enter_ms: f64,
    /// Fraction of `exit_ms` after which the incoming view starts fading in.
    pub enter_overlap: f64,
    pub first_paint_ms: f64,
    pub frame_ms: u32,
}

impl TransitionConfig {
    /// Offset of the enter tween relative to the start of the exit tween.
    pub fn enter_offset_ms(&self) -> f64 {
        self.exit_ms * self.enter_overlap.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub correction_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct I18nConfig {
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[transition]
exit_ms = 300.0
enter_ms = 400.0
enter_overlap = 0.5
first_paint_ms = 500.0
frame_ms = 16

[scroll]
correction_delay_ms = 100

[carousel]
interval_ms = 7000

[i18n]
default_locale = "en"

[contact]
email = "info@facilitypro.example"
phone = "+971 4 000 0000"
"#;

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            transition: TransitionConfig {
                exit_ms: 300.0,
                enter_ms: 400.0,
                enter_overlap: 0.5,
                first_paint_ms: 500.0,
                frame_ms: 16,
            },
            scroll: ScrollConfig {
                correction_delay_ms: 100,
            },
            carousel: CarouselConfig { interval_ms: 7000 },
            i18n: I18nConfig {
                default_locale: Locale::En,
            },
            contact: ContactConfig {
                email: "info@facilitypro.example".to_string(),
                phone: "+971 4 000 0000".to_string(),
            },
        }
    }
}

/// Parse a TOML document into a site configuration.
pub fn parse_config(source: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(source)?;
    if config.transition.exit_ms <= 0.0 || config.transition.enter_ms <= 0.0 {
        anyhow::bail!("transition durations must be positive");
    }
    if !(0.0..1.0).contains(&config.transition.enter_overlap) {
        anyhow::bail!(
            "transition.enter_overlap must be in [0, 1), got {}",
            config.transition.enter_overlap
        );
    }
    Ok(config)
}

/// Load the embedded configuration.
pub fn load_config() -> anyhow::Result<SiteConfig> {
    parse_config(DEFAULT_CONFIG)
}

/// Load the configuration, falling back to compiled-in defaults on error.
pub fn load_config_or_default() -> SiteConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

/// Hook to read the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(load_config().unwrap(), SiteConfig::default());
    }

    #[test]
    fn enter_offset_is_half_the_exit_by_default() {
        assert_eq!(SiteConfig::default().transition.enter_offset_ms(), 150.0);
    }

    #[test]
    fn overlap_is_clamped() {
        let mut transition = SiteConfig::default().transition;
        transition.enter_overlap = 3.0;
        assert_eq!(transition.enter_offset_ms(), transition.exit_ms);
    }

    #[test]
    fn overlap_that_leaves_no_cross_fade_is_rejected() {
        for overlap in ["1.0", "1.5", "-0.1"] {
            let source = DEFAULT_CONFIG.replace(
                "enter_overlap = 0.5",
                &format!("enter_overlap = {overlap}"),
            );
            assert!(parse_config(&source).is_err(), "accepted {overlap}");
        }
        let source = DEFAULT_CONFIG.replace("enter_overlap = 0.5", "enter_overlap = 0.9");
        assert!(parse_config(&source).is_ok());
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let source = DEFAULT_CONFIG.replace("default_locale = \"en\"", "default_locale = \"fr\"");
        assert!(parse_config(&source).is_err());
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        let source = DEFAULT_CONFIG.replace("exit_ms = 300.0", "exit_ms = 0.0");
        assert!(parse_config(&source).is_err());
    }
}
