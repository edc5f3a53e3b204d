use crate::config::DEFAULT_LOCALE;
use tracing::warn;

/// Locales with translation files
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// Switch display strings to `locale`, falling back to the default locale
/// when no translation exists. Returns the locale actually applied.
pub fn set_locale(locale: &str) -> &str {
    if available_locales().contains(&locale) {
        rust_i18n::set_locale(locale);
        locale
    } else {
        warn!(
            "No translations for locale '{}', using '{}'",
            locale, DEFAULT_LOCALE
        );
        rust_i18n::set_locale(DEFAULT_LOCALE);
        DEFAULT_LOCALE
    }
}
