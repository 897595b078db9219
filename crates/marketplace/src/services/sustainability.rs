//! Sustainability scoring engine.
//!
//! Pure computation over categories, prices, and purchase history: nothing
//! here touches the entity store. Callers persist results themselves
//! (checkout writes the order's contribution onto the purchase record and
//! the recomputed lifetime score onto the buyer).
//!
//! Scores are unitless "contribution points": a category base weight
//! scaled by a price band and rounded to the nearest integer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ecofinds_core::{Category, Price, SustainabilityLevel};

use crate::models::{Product, Purchase, PurchaseLine};

/// Ordered level ladder: minimum lifetime contribution for each level,
/// highest first.
const LEVEL_LADDER: [(u32, SustainabilityLevel); 5] = [
    (500, SustainabilityLevel::EcoChampion),
    (300, SustainabilityLevel::GreenWarrior),
    (200, SustainabilityLevel::SustainabilityHero),
    (100, SustainabilityLevel::EcoEnthusiast),
    (50, SustainabilityLevel::GreenStarter),
];

/// Sustainability base weight for a category.
///
/// Higher weight means reusing an item in this category avoids more
/// environmental impact.
#[must_use]
pub const fn base_weight(category: Category) -> u32 {
    match category {
        Category::Electronics => 25,
        Category::Furniture => 20,
        Category::Clothing => 15,
        Category::HomeAndGarden => 12,
        Category::SportsAndOutdoors => 10,
        Category::BooksAndMedia => 8,
        Category::ToysAndGames => 6,
        Category::Others => 5,
    }
}

/// Price band scaling a category's base weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    /// Under 50.
    Low,
    /// 50 through 200 inclusive.
    Medium,
    /// Over 200 through 500 inclusive.
    High,
    /// Over 500.
    Premium,
}

impl PriceBand {
    /// Band for a price amount.
    ///
    /// Medium is the default; the boundaries themselves (50, 200, 500)
    /// never escalate: 50 and 200 are Medium, 500 is High.
    #[must_use]
    pub fn for_amount(amount: Decimal) -> Self {
        if amount < Decimal::from(50) {
            Self::Low
        } else if amount > Decimal::from(500) {
            Self::Premium
        } else if amount > Decimal::from(200) {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Multiplier applied to the category base weight.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.2,
            Self::Premium => 1.5,
        }
    }
}

/// Anything the engine can score: a live product or a sale-time snapshot.
pub trait ScoredItem {
    fn category(&self) -> Category;
    fn price(&self) -> Price;
    fn title(&self) -> &str;
}

impl ScoredItem for Product {
    fn category(&self) -> Category {
        self.category
    }

    fn price(&self) -> Price {
        self.price
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl ScoredItem for PurchaseLine {
    fn category(&self) -> Category {
        self.category
    }

    fn price(&self) -> Price {
        self.price
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Contribution of a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemImpact {
    /// Rounded contribution points.
    pub contribution: u32,
    /// Category that drove the base weight.
    pub category: Category,
    /// Category base weight.
    pub base_weight: u32,
    /// Price band that scaled the weight.
    pub price_band: PriceBand,
    /// Encouragement shown next to the score.
    pub explanation: String,
}

/// One line of an order's stored contribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBreakdown {
    pub contribution: u32,
    pub category: Category,
    pub base_weight: u32,
    pub price_multiplier: f64,
    pub explanation: String,
    pub item_title: String,
    pub item_price: Price,
}

/// Contribution of a whole order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderImpact {
    /// Sum of per-line contributions.
    pub total_contribution: u32,
    /// Number of order lines (not units).
    pub item_count: u32,
    /// Per-line detail, in order.
    pub breakdown: Vec<ItemBreakdown>,
    /// Banded motivational message.
    pub message: String,
}

/// Lifetime contribution summary derived from full purchase history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifetimeImpact {
    /// Sum of every purchased line's contribution.
    pub total_contribution: u32,
    /// Total units purchased.
    pub total_items: u32,
    /// Rounded average contribution per unit.
    pub average_contribution: u32,
    /// Level reached on the ladder.
    pub level: SustainabilityLevel,
    /// Next ladder threshold, or `None` at the top.
    pub next_level: Option<u32>,
    /// Percent progress toward `next_level` (100 at the top).
    pub progress: u32,
}

/// Round half away from zero, the scheme the scores have always used.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u32(value: f64) -> u32 {
    value.round() as u32
}

/// Score a single item.
#[must_use]
pub fn item_impact(item: &impl ScoredItem) -> ItemImpact {
    let category = item.category();
    let weight = base_weight(category);
    let band = PriceBand::for_amount(item.price().amount);
    let contribution = round_to_u32(f64::from(weight) * band.multiplier());

    ItemImpact {
        contribution,
        category,
        base_weight: weight,
        price_band: band,
        explanation: explanation(category, item.price().amount),
    }
}

/// Score a whole order.
///
/// Each order line is scored once, regardless of its quantity; that is how
/// checkout has always aggregated and quantity-weighting would change
/// every stored score.
#[must_use]
pub fn order_impact<T: ScoredItem>(items: &[T]) -> OrderImpact {
    if items.is_empty() {
        return OrderImpact {
            total_contribution: 0,
            item_count: 0,
            breakdown: Vec::new(),
            message: "No items to calculate sustainability impact.".to_owned(),
        };
    }

    let breakdown: Vec<ItemBreakdown> = items
        .iter()
        .map(|item| {
            let impact = item_impact(item);
            ItemBreakdown {
                contribution: impact.contribution,
                category: impact.category,
                base_weight: impact.base_weight,
                price_multiplier: impact.price_band.multiplier(),
                explanation: impact.explanation,
                item_title: item.title().to_owned(),
                item_price: item.price(),
            }
        })
        .collect();

    let total_contribution = breakdown.iter().map(|b| b.contribution).sum();

    OrderImpact {
        total_contribution,
        item_count: u32::try_from(items.len()).unwrap_or(u32::MAX),
        breakdown,
        message: order_message(total_contribution),
    }
}

/// Derive a buyer's lifetime summary from their full purchase history.
#[must_use]
pub fn lifetime_impact(purchases: &[Purchase]) -> LifetimeImpact {
    let mut total_contribution: u32 = 0;
    let mut total_items: u32 = 0;

    for purchase in purchases {
        for line in &purchase.products {
            total_contribution += item_impact(line).contribution;
            total_items += line.quantity.max(1);
        }
    }

    let average_contribution = if total_items == 0 {
        0
    } else {
        round_to_u32(f64::from(total_contribution) / f64::from(total_items))
    };

    let level = level_for(total_contribution);
    let next_level = next_threshold(total_contribution);
    let progress = next_level.map_or(100, |next| {
        round_to_u32(f64::from(total_contribution) / f64::from(next) * 100.0)
    });

    LifetimeImpact {
        total_contribution,
        total_items,
        average_contribution,
        level,
        next_level,
        progress,
    }
}

/// Level reached for a lifetime contribution.
#[must_use]
pub fn level_for(total_contribution: u32) -> SustainabilityLevel {
    LEVEL_LADDER
        .into_iter()
        .find_map(|(threshold, level)| (total_contribution >= threshold).then_some(level))
        .unwrap_or(SustainabilityLevel::Beginner)
}

/// Next ladder threshold strictly above the contribution, `None` at the top.
#[must_use]
pub fn next_threshold(total_contribution: u32) -> Option<u32> {
    LEVEL_LADDER
        .into_iter()
        .rev()
        .map(|(threshold, _)| threshold)
        .find(|threshold| total_contribution < *threshold)
}

/// Tips for a level.
#[must_use]
pub const fn tips_for(level: SustainabilityLevel) -> &'static [&'static str] {
    match level {
        SustainabilityLevel::Beginner => &[
            "Start by buying second-hand books and clothing",
            "Look for electronics in good condition",
            "Consider the environmental impact of each purchase",
        ],
        SustainabilityLevel::GreenStarter => &[
            "Try buying second-hand furniture for your home",
            "Look for high-quality items that last longer",
            "Share your sustainability journey with friends",
        ],
        SustainabilityLevel::EcoEnthusiast => &[
            "Focus on high-impact categories like electronics",
            "Consider the full lifecycle of products",
            "Encourage others to join the circular economy",
        ],
        SustainabilityLevel::SustainabilityHero => &[
            "You're making a real difference! Keep it up!",
            "Consider selling your own unused items",
            "Share your success stories to inspire others",
        ],
        SustainabilityLevel::GreenWarrior => &[
            "You're a sustainability leader!",
            "Mentor others in sustainable shopping",
            "Look for ways to maximize your impact",
        ],
        SustainabilityLevel::EcoChampion => &[
            "You're an inspiration to us all!",
            "Consider becoming a sustainability ambassador",
            "Your impact is truly remarkable!",
        ],
    }
}

/// Tips for a stored level name; unrecognized names get Beginner tips.
#[must_use]
pub fn tips_for_name(level_name: &str) -> &'static [&'static str] {
    let level = level_name
        .parse::<SustainabilityLevel>()
        .unwrap_or(SustainabilityLevel::Beginner);
    tips_for(level)
}

fn explanation(category: Category, amount: Decimal) -> String {
    let base = match category {
        Category::Electronics => {
            "Prevented e-waste and saved rare materials! Electronics have the highest environmental impact."
        }
        Category::Furniture => {
            "Saved trees and reduced manufacturing waste! Furniture reuse has significant environmental benefits."
        }
        Category::Clothing => {
            "Reduced fast fashion waste! Extending clothing lifecycle helps the environment."
        }
        Category::HomeAndGarden => "Reduced packaging waste and promoted sustainable living!",
        Category::SportsAndOutdoors => "Extended product lifecycle and promoted active lifestyle!",
        Category::BooksAndMedia => "Reduced paper waste and promoted knowledge sharing!",
        Category::ToysAndGames => "Promoted sharing economy and reduced toy waste!",
        Category::Others => "Contributed to circular economy and reduced waste!",
    };

    if amount > Decimal::from(200) {
        format!("{base} High-value items have even greater impact!")
    } else {
        base.to_owned()
    }
}

fn order_message(total_contribution: u32) -> String {
    if total_contribution >= 100 {
        format!(
            "\u{1f30d} AMAZING! You've contributed {total_contribution}% to sustainability! You're a true eco-warrior!"
        )
    } else if total_contribution >= 50 {
        format!(
            "\u{1f331} EXCELLENT! You've contributed {total_contribution}% to sustainability! Keep up the great work!"
        )
    } else if total_contribution >= 25 {
        format!(
            "\u{267b}\u{fe0f} GREAT! You've contributed {total_contribution}% to sustainability! Every action counts!"
        )
    } else if total_contribution >= 10 {
        format!(
            "\u{1f33f} GOOD! You've contributed {total_contribution}% to sustainability! You're making a difference!"
        )
    } else {
        format!(
            "\u{1f331} You've contributed {total_contribution}% to sustainability! Every small step helps!"
        )
    }
}
