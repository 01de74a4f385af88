// crates/locator-core/src/translate.rs
use crate::traits::Translated;

/// Locale used when the requested one has no translation.
pub const FALLBACK_LOCALE: &str = "en";

/// Picks the display name of `entity` for `locale`.
///
/// Order: the requested locale, then [`FALLBACK_LOCALE`], then `""`.
/// Cities and countries are resolved independently, so a result may pair a
/// localized city name with an English country name.
pub fn resolve<T: Translated + ?Sized>(entity: &T, locale: &str) -> String {
    entity
        .translation(locale)
        .or_else(|| entity.translation(FALLBACK_LOCALE))
        .unwrap_or_default()
        .to_string()
}
