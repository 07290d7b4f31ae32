use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reusable food item with nutrition values per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(default)]
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDish {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
    pub dish_id: i64,
    pub weight_g: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
}

/// One logged meal as the server reports it, already scaled by weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub weight: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(default)]
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub date: Option<String>,
    pub totals: Totals,
    pub meals: Vec<MealSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_without_fiber_defaults_to_zero() {
        let dish: Dish = serde_json::from_str(
            r#"{"id":7,"name":"Egg","calories":155,"protein":13,"fat":11,"carbs":1.1}"#,
        )
        .unwrap();
        assert_eq!(dish.id, 7);
        assert_eq!(dish.fiber, 0.0);
    }

    #[test]
    fn new_meal_serializes_iso_date() {
        let meal = NewMeal {
            dish_id: 3,
            weight_g: 150.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "dish_id": 3, "weight_g": 150.0, "date": "2024-05-01" })
        );
    }

    #[test]
    fn stats_accept_extra_server_fields() {
        let stats: DailyStats = serde_json::from_str(
            r#"{
                "date": "2024-05-01",
                "totals": {"calories": 310.4, "protein": 26, "fat": 22, "carbs": 2.2, "fiber": 0},
                "meals": [{"id": 1, "name": "Egg", "weight": 200, "calories": 310, "protein": 26,
                           "fat": 22, "carbs": 2.2, "fiber": 0}]
            }"#,
        )
        .unwrap();
        assert_eq!(stats.meals.len(), 1);
        assert_eq!(stats.meals[0].id, Some(1));
        assert_eq!(stats.totals.calories, 310.4);
    }
}
