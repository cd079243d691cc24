use serde::{Deserialize, Serialize};

/// Document writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Direction for an arbitrary language tag.
    ///
    /// Only `ar` is right-to-left; every other value, including unknown tags,
    /// resolves to left-to-right.
    pub fn for_tag(tag: &str) -> Self {
        if tag == Locale::Ar.tag() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Value of the HTML `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::for_tag(self.tag())
    }

    /// Label shown on the language toggle (always in the language itself).
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    /// The other language, used by the header toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Ar]
    }

    /// Parse a BCP 47 tag by its primary subtag (`ar-EG` → `Ar`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_is_rtl() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Direction::for_tag("ar"), Direction::Rtl);
    }

    #[test]
    fn everything_else_is_ltr() {
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        for tag in ["en", "fr", "", "AR-x", "arabic"] {
            assert_eq!(Direction::for_tag(tag), Direction::Ltr, "tag {tag:?}");
        }
    }

    #[test]
    fn from_tag_uses_primary_subtag() {
        assert_eq!(Locale::from_tag("ar-EG"), Some(Locale::Ar));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), None);
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Locale::En.toggled(), Locale::Ar);
        assert_eq!(Locale::Ar.toggled().toggled(), Locale::Ar);
    }
}
