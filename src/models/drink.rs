use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The ten drinks the catalog knows about.
///
/// serde identifiers (camelCase) double as the persisted raw values in the
/// consumption ledger; `Display` gives the human-readable name ("Flat White").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum DrinkType {
    Espresso,
    Americano,
    Cappuccino,
    Latte,
    FlatWhite,
    Mocha,
    Macchiato,
    Ristretto,
    Doppio,
    Matcha,
}
