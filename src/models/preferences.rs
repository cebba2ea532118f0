use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Point-in-time copy of the user's taste preferences. A default snapshot
/// (all false/empty) means no rule applies; it is never an error state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSnapshot {
    pub likes_pure_coffee: bool,
    pub likes_syrups: bool,
    pub has_allergies: bool,
    pub allergens: Vec<String>,
    /// Free-text flavor preference; only values parsing to a [`FlavorNote`]
    /// affect the output.
    pub flavor: Option<String>,
}

impl PreferenceSnapshot {
    /// The flavor preference, if it names a recognized note.
    pub fn flavor_note(&self) -> Option<FlavorNote> {
        self.flavor.as_deref().and_then(|f| f.parse().ok())
    }
}

/// The flavor notes the engine knows a descriptive clause for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum FlavorNote {
    Sour,
    Bitter,
    Tart,
    Fruity,
}
