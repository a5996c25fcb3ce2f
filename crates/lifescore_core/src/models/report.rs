//! Score report types
//!
//! The output contract of the calculator: six fixed categories on a 1-10
//! score scale with 1-99 percentiles, plus the aggregate summary.

use serde::{Deserialize, Serialize};

/// The six life domains being scored, in fixed declaration order.
///
/// The declaration order doubles as the tie-break order when ranking
/// categories by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Attractiveness,
    StrengthFitness,
    IncomeCareer,
    RelationshipDating,
    SocialLife,
    Lifestyle,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Attractiveness,
        Category::StrengthFitness,
        Category::IncomeCareer,
        Category::RelationshipDating,
        Category::SocialLife,
        Category::Lifestyle,
    ];

    /// Human-readable name used in narrative text.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Attractiveness => "Attractiveness",
            Category::StrengthFitness => "Strength & Fitness",
            Category::IncomeCareer => "Income & Career",
            Category::RelationshipDating => "Relationship & Dating",
            Category::SocialLife => "Social Life",
            Category::Lifestyle => "Lifestyle",
        }
    }
}

/// Result for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// 1-10
    pub score: u8,
    /// 1-99, clamped
    pub percentile: u8,
    pub explanation: String,
    pub level_up_tip: String,
}

/// Per-category breakdown with exactly the six fixed keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub attractiveness: CategoryScore,
    pub strength_fitness: CategoryScore,
    pub income_career: CategoryScore,
    pub relationship_dating: CategoryScore,
    pub social_life: CategoryScore,
    pub lifestyle: CategoryScore,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Attractiveness => &self.attractiveness,
            Category::StrengthFitness => &self.strength_fitness,
            Category::IncomeCareer => &self.income_career,
            Category::RelationshipDating => &self.relationship_dating,
            Category::SocialLife => &self.social_life,
            Category::Lifestyle => &self.lifestyle,
        }
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> [(Category, &CategoryScore); 6] {
        [
            (Category::Attractiveness, &self.attractiveness),
            (Category::StrengthFitness, &self.strength_fitness),
            (Category::IncomeCareer, &self.income_career),
            (Category::RelationshipDating, &self.relationship_dating),
            (Category::SocialLife, &self.social_life),
            (Category::Lifestyle, &self.lifestyle),
        ]
    }
}

/// Full calculation result for one survey submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// 1-10, rounded mean of the six category scores.
    pub overall_score: u8,
    /// 1-99, rounded mean of the six category percentiles.
    pub overall_percentile: u8,
    pub strongest_category: Category,
    pub weakest_category: Category,
    pub categories: CategoryScores,
    pub summary: String,
    pub primary_improvement: String,
}
