use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Place categories the user can filter on. Values are Places API type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludedType {
    AmericanRestaurant,
    Bakery,
    Bar,
    BarbecueRestaurant,
    BrazilianRestaurant,
    BreakfastRestaurant,
    BrunchRestaurant,
    Cafe,
    ChineseRestaurant,
    CoffeeShop,
    FastFoodRestaurant,
    FrenchRestaurant,
    GreekRestaurant,
    HamburgerRestaurant,
    IceCreamShop,
    IndianRestaurant,
    ItalianRestaurant,
    JapaneseRestaurant,
    MealTakeaway,
    MexicanRestaurant,
    PizzaRestaurant,
    Restaurant,
    SeafoodRestaurant,
    SteakHouse,
    SushiRestaurant,
    ThaiRestaurant,
    VeganRestaurant,
    VegetarianRestaurant,
}

impl IncludedType {
    pub const ALL: [IncludedType; 28] = [
        IncludedType::AmericanRestaurant,
        IncludedType::Bakery,
        IncludedType::Bar,
        IncludedType::BarbecueRestaurant,
        IncludedType::BrazilianRestaurant,
        IncludedType::BreakfastRestaurant,
        IncludedType::BrunchRestaurant,
        IncludedType::Cafe,
        IncludedType::ChineseRestaurant,
        IncludedType::CoffeeShop,
        IncludedType::FastFoodRestaurant,
        IncludedType::FrenchRestaurant,
        IncludedType::GreekRestaurant,
        IncludedType::HamburgerRestaurant,
        IncludedType::IceCreamShop,
        IncludedType::IndianRestaurant,
        IncludedType::ItalianRestaurant,
        IncludedType::JapaneseRestaurant,
        IncludedType::MealTakeaway,
        IncludedType::MexicanRestaurant,
        IncludedType::PizzaRestaurant,
        IncludedType::Restaurant,
        IncludedType::SeafoodRestaurant,
        IncludedType::SteakHouse,
        IncludedType::SushiRestaurant,
        IncludedType::ThaiRestaurant,
        IncludedType::VeganRestaurant,
        IncludedType::VegetarianRestaurant,
    ];
}

/// Names come from the serde renames, so parsing and display share one table.
impl FromStr for IncludedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| format!("Unknown place type: {}", s))
    }
}

impl std::fmt::Display for IncludedType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match serde_json::to_value(self) {
            Ok(Value::String(name)) => write!(f, "{}", name),
            _ => Err(std::fmt::Error),
        }
    }
}
