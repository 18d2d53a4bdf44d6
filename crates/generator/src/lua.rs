//! `$KEY$` substitution for Lua group scripts and briefing remark templates.

use crate::settings::{GroupSettings, SettingValue};

/// Replace every `$KEY$` occurrence in `text` with the rendered value.
/// Keys are uppercased to match the token convention in script templates.
pub fn replace_key(text: &mut String, key: &str, value: &SettingValue) {
    let token = format!("${}$", key.to_ascii_uppercase());
    if text.contains(&token) {
        *text = text.replace(&token, &value.to_string());
    }
}

/// Substitute every settings entry into `text`.
pub fn replace_from_settings(text: &mut String, settings: &GroupSettings) {
    for (key, value) in settings.iter() {
        replace_key(text, key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_key_uppercases_token() {
        let mut text = "JTAC code is $LASERCODE$.".to_string();
        replace_key(&mut text, "LaserCode", &SettingValue::Integer(1688));
        assert_eq!(text, "JTAC code is 1688.");
    }

    #[test]
    fn test_replace_flag_is_lowercase() {
        let mut text = "hidden = $HIDDEN$".to_string();
        replace_key(&mut text, "Hidden", &SettingValue::Flag(true));
        assert_eq!(text, "hidden = true");
    }

    #[test]
    fn test_replace_from_settings_substitutes_all() {
        let mut settings = GroupSettings::new();
        settings.set_if_unused("ObjectiveName", "ALPHA");
        settings.set_if_unused("LaserCode", 1711i64);

        let mut text = "$OBJECTIVENAME$ has code $LASERCODE$, repeat $LASERCODE$.".to_string();
        replace_from_settings(&mut text, &settings);
        assert_eq!(text, "ALPHA has code 1711, repeat 1711.");
    }

    #[test]
    fn test_unmatched_tokens_are_left_alone() {
        let mut text = "no such $TOKEN$ here".to_string();
        replace_key(&mut text, "Other", &SettingValue::Integer(1));
        assert_eq!(text, "no such $TOKEN$ here");
    }
}
