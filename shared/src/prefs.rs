use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumIter, EnumString)]
pub enum Locale {
    #[default]
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "hi")]
    Hi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Display, AsRefStr, EnumIter)]
pub enum FontScale {
    #[strum(serialize = "small")]
    Small,
    #[default]
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "large")]
    Large,
}

impl FontScale {
    pub fn larger(self) -> Self {
        match self {
            FontScale::Small => FontScale::Medium,
            FontScale::Medium | FontScale::Large => FontScale::Large,
        }
    }

    pub fn smaller(self) -> Self {
        match self {
            FontScale::Large => FontScale::Medium,
            FontScale::Medium | FontScale::Small => FontScale::Small,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FontScale::Small => "font-small",
            FontScale::Medium => "font-medium",
            FontScale::Large => "font-large",
        }
    }
}

/// Where the input frames come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumIter)]
pub enum DataSource {
    #[default]
    #[strum(serialize = "upload")]
    Upload,
    #[strum(serialize = "sample")]
    Sample,
}

/// Per-session display settings. Nothing here outlives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPreferences {
    pub locale: Locale,
    pub font_scale: FontScale,
}

impl DisplayPreferences {
    pub fn increase_font(&mut self) {
        self.font_scale = self.font_scale.larger();
    }

    pub fn decrease_font(&mut self) {
        self.font_scale = self.font_scale.smaller();
    }

    pub fn can_increase_font(&self) -> bool {
        self.font_scale != FontScale::Large
    }

    pub fn can_decrease_font(&self) -> bool {
        self.font_scale != FontScale::Small
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn font_scale_saturates_at_both_ends() {
        let mut prefs = DisplayPreferences::default();
        assert_eq!(prefs.font_scale, FontScale::Medium);

        prefs.increase_font();
        prefs.increase_font();
        assert_eq!(prefs.font_scale, FontScale::Large);
        assert!(!prefs.can_increase_font());

        for _ in 0..4 {
            prefs.decrease_font();
        }
        assert_eq!(prefs.font_scale, FontScale::Small);
        assert!(!prefs.can_decrease_font());
    }

    #[test]
    fn locale_round_trips_through_its_code() {
        for locale in Locale::iter() {
            assert_eq!(Locale::from_str(locale.as_ref()).unwrap(), locale);
        }
        assert!(Locale::from_str("fr").is_err());
    }
}
