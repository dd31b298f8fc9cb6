//! Food listing categories.

use serde::{Deserialize, Serialize};

/// Category of a surplus-food listing.
///
/// Matches the categories restaurants can list under. Browse filters treat
/// "all" as the absence of a category rather than a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Bakery,
    #[serde(rename = "Prepared Meals")]
    PreparedMeals,
    #[serde(rename = "Fresh Produce")]
    FreshProduce,
    Dairy,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::Bakery,
        Self::PreparedMeals,
        Self::FreshProduce,
        Self::Dairy,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bakery => write!(f, "Bakery"),
            Self::PreparedMeals => write!(f, "Prepared Meals"),
            Self::FreshProduce => write!(f, "Fresh Produce"),
            Self::Dairy => write!(f, "Dairy"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bakery" => Ok(Self::Bakery),
            "Prepared Meals" => Ok(Self::PreparedMeals),
            "Fresh Produce" => Ok(Self::FreshProduce),
            "Dairy" => Ok(Self::Dairy),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
