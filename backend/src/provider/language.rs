use localization_common::model::resource::INVARIANT_CULTURE;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const INVARIANT_DISPLAY_NAME: &str = "Invariant Language (Invariant Country)";

/// Parses a language tag into its canonical form (`SV-se` becomes `sv-SE`).
///
/// The invariant culture (`""`) is kept as is. Returns `None` for anything that is
/// not a well-formed language identifier.
pub fn canonical_language(language: &str) -> Option<String> {
    if language == INVARIANT_CULTURE {
        return Some(INVARIANT_CULTURE.to_string());
    }
    language
        .parse::<LanguageIdentifier>()
        .ok()
        .map(|id| id.to_string())
}

/// Human readable name for a language code, falling back to the code itself.
pub fn display_name(language: &str, names: &HashMap<String, String>) -> String {
    if language == INVARIANT_CULTURE {
        return names
            .get(language)
            .cloned()
            .unwrap_or_else(|| INVARIANT_DISPLAY_NAME.to_string());
    }
    names
        .get(language)
        .cloned()
        .unwrap_or_else(|| language.to_string())
}
