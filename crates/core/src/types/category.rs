//! Product category and condition enums.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Marketplace product categories.
///
/// Serialized as the human-readable names the marketplace has always
/// stored (e.g., `"Home & Garden"`). Unrecognized category strings
/// deserialize to [`Category::Others`] so old or hand-edited data never
/// fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    HomeAndGarden,
    SportsAndOutdoors,
    BooksAndMedia,
    ToysAndGames,
    #[default]
    Others,
}

impl Category {
    /// All categories, in descending sustainability-weight order.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Furniture,
        Self::Clothing,
        Self::HomeAndGarden,
        Self::SportsAndOutdoors,
        Self::BooksAndMedia,
        Self::ToysAndGames,
        Self::Others,
    ];

    /// Human-readable category name, as stored and displayed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Clothing => "Clothing",
            Self::HomeAndGarden => "Home & Garden",
            Self::SportsAndOutdoors => "Sports & Outdoors",
            Self::BooksAndMedia => "Books & Media",
            Self::ToysAndGames => "Toys & Games",
            Self::Others => "Others",
        }
    }

    /// Parse a category name, falling back to [`Category::Others`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .unwrap_or(Self::Others)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&name))
    }
}

/// Condition of a second-hand listing.
///
/// Unrecognized condition strings deserialize to the [`Condition::Good`]
/// default, the same tolerance categories get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    New,
    LikeNew,
    Excellent,
    #[default]
    Good,
    Fair,
}

impl Condition {
    const ALL: [Self; 5] = [
        Self::New,
        Self::LikeNew,
        Self::Excellent,
        Self::Good,
        Self::Fair,
    ];

    /// Human-readable condition name, as stored and displayed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like New",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .unwrap_or_default())
    }
}
