//! Per-session user settings. Kept in the session only, never stored.

use serde::{Deserialize, Serialize};

crate::define_label_enum!(
    Theme {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
);

crate::define_label_enum!(
    Language {
        En => "en",
        Es => "es",
        Fr => "fr",
    }
);

crate::define_label_enum!(
    Timezone {
        Utc => "UTC",
        Est => "EST",
        Pst => "PST",
    }
);

crate::define_label_enum!(
    TemperatureUnit {
        Celsius => "celsius",
        Fahrenheit => "fahrenheit",
    }
);

impl TemperatureUnit {
    /// Convert a Celsius reading into this unit.
    pub fn convert_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Format a Celsius reading for display, e.g. `39.2°F`.
    pub fn display(&self, celsius: f64) -> String {
        // Adding 0.0 turns -0.0 into 0.0.
        let value = (self.convert_celsius(celsius) * 10.0).round() / 10.0 + 0.0;
        // Whole numbers print without a decimal, like the dashboard cards.
        if value.fract() == 0.0 {
            format!("{}{}", value, self.symbol())
        } else {
            format!("{:.1}{}", value, self.symbol())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub maintenance: bool,
    pub inventory: bool,
    pub reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            maintenance: true,
            inventory: true,
            reports: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSettings {
    pub theme: Theme,
    pub language: Language,
    pub timezone: Timezone,
    pub temperature_unit: TemperatureUnit,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::En,
            timezone: Timezone::Utc,
            temperature_unit: TemperatureUnit::Celsius,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub preferences: PreferenceSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_form() {
        let settings = UserSettings::default();
        assert!(settings.notifications.email);
        assert!(settings.notifications.reports);
        assert_eq!(settings.preferences.theme, Theme::Light);
        assert_eq!(settings.preferences.timezone, Timezone::Utc);
        assert_eq!(settings.preferences.temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(TemperatureUnit::Celsius.display(4.0), "4°C");
        assert_eq!(TemperatureUnit::Celsius.display(3.5), "3.5°C");
        assert_eq!(TemperatureUnit::Fahrenheit.display(4.0), "39.2°F");
        assert_eq!(TemperatureUnit::Fahrenheit.display(0.0), "32°F");
    }

    #[test]
    fn test_temperature_display_rounds_before_dropping_decimal() {
        assert_eq!(TemperatureUnit::Celsius.display(3.96), "4°C");
        assert_eq!(TemperatureUnit::Celsius.display(-0.0), "0°C");
        assert_eq!(TemperatureUnit::Celsius.display(-0.04), "0°C");
        assert_eq!(TemperatureUnit::Celsius.display(-1.5), "-1.5°C");
        assert_eq!(TemperatureUnit::Fahrenheit.display(3.5), "38.3°F");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"preferences": {"theme": "dark"}}"#).unwrap();
        assert_eq!(settings.preferences.theme, Theme::Dark);
        assert_eq!(settings.preferences.language, Language::En);
        assert!(settings.notifications.push);
    }
}
