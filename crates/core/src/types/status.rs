//! Status enums for purchases and users.

use serde::{Deserialize, Serialize};

/// Purchase record status.
///
/// The demo checkout settles instantly, so purchases are written as
/// `Completed`; the other states exist for data imported from richer
/// sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Pending,
    #[default]
    Completed,
    Cancelled,
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
}

/// Gamified sustainability level, lowest to highest.
///
/// Variant order matters: it gives the derived `Ord` the ladder order, so
/// `level_a < level_b` means `level_b` is the higher tier. Serialized as
/// the display names the marketplace has always stored; unrecognized
/// names deserialize to `Beginner` rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SustainabilityLevel {
    #[default]
    Beginner,
    GreenStarter,
    EcoEnthusiast,
    SustainabilityHero,
    GreenWarrior,
    EcoChampion,
}

impl SustainabilityLevel {
    /// All levels, lowest to highest.
    pub const ALL: [Self; 6] = [
        Self::Beginner,
        Self::GreenStarter,
        Self::EcoEnthusiast,
        Self::SustainabilityHero,
        Self::GreenWarrior,
        Self::EcoChampion,
    ];

    /// Human-readable level name, as stored and displayed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::GreenStarter => "Green Starter",
            Self::EcoEnthusiast => "Eco Enthusiast",
            Self::SustainabilityHero => "Sustainability Hero",
            Self::GreenWarrior => "Green Warrior",
            Self::EcoChampion => "Eco Champion",
        }
    }
}

impl std::fmt::Display for SustainabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for SustainabilityLevel {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SustainabilityLevel {
    fn deserialize<D: serde::de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_default())
    }
}

impl std::str::FromStr for SustainabilityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| format!("invalid sustainability level: {s}"))
    }
}
