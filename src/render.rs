use crate::models::{DailyStats, Dish, MealSummary, Totals};

pub const EMPTY_MEALS_PLACEHOLDER: &str = "Пока ничего не съедено";
pub const DISH_CREATED: &str = "Блюдо создано!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub fiber: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRow {
    pub name: String,
    pub portion: String,
    pub macros: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealListView {
    Placeholder(&'static str),
    Rows(Vec<MealRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub dish_id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishInfoView {
    pub name: String,
    pub macros: String,
}

pub fn totals_view(totals: &Totals) -> TotalsView {
    TotalsView {
        calories: (totals.calories.round() as i64).to_string(),
        protein: totals.protein.to_string(),
        fat: totals.fat.to_string(),
        carbs: totals.carbs.to_string(),
        fiber: totals.fiber.to_string(),
    }
}

pub fn meal_row(meal: &MealSummary) -> MealRow {
    MealRow {
        name: meal.name.clone(),
        portion: format!("{}г • {} ккал", meal.weight, meal.calories),
        macros: format!("Б {} | Ж {} | У {}", meal.protein, meal.fat, meal.carbs),
    }
}

pub fn meal_list_view(meals: &[MealSummary]) -> MealListView {
    if meals.is_empty() {
        MealListView::Placeholder(EMPTY_MEALS_PLACEHOLDER)
    } else {
        MealListView::Rows(meals.iter().map(meal_row).collect())
    }
}

pub fn stats_view(stats: &DailyStats) -> (TotalsView, MealListView) {
    (totals_view(&stats.totals), meal_list_view(&stats.meals))
}

pub fn search_row(dish: &Dish) -> SearchRow {
    SearchRow {
        dish_id: dish.id,
        label: format!("{} — {} ккал", dish.name, dish.calories),
    }
}

pub fn dish_info(dish: &Dish) -> DishInfoView {
    DishInfoView {
        name: dish.name.clone(),
        macros: format!(
            "{} ккал / 100г | Б {} | Ж {} | У {}",
            dish.calories, dish.protein, dish.fat, dish.carbs
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> Dish {
        Dish {
            id: 7,
            name: "Egg".into(),
            calories: 155.0,
            protein: 13.0,
            fat: 11.0,
            carbs: 1.1,
            fiber: 0.0,
        }
    }

    #[test]
    fn totals_round_only_calories() {
        let view = totals_view(&Totals {
            calories: 1199.6,
            protein: 80.4,
            fat: 50.0,
            carbs: 120.25,
            fiber: 0.0,
        });
        assert_eq!(view.calories, "1200");
        assert_eq!(view.protein, "80.4");
        assert_eq!(view.fat, "50");
        assert_eq!(view.carbs, "120.25");
        assert_eq!(view.fiber, "0");
    }

    #[test]
    fn empty_meals_show_placeholder() {
        assert_eq!(
            meal_list_view(&[]),
            MealListView::Placeholder(EMPTY_MEALS_PLACEHOLDER)
        );
    }

    #[test]
    fn meal_rows_show_portion_and_macros() {
        let meal = MealSummary {
            id: Some(1),
            name: "Egg".into(),
            weight: 120.0,
            calories: 186.0,
            protein: 15.6,
            fat: 13.2,
            carbs: 1.3,
            fiber: None,
        };
        let MealListView::Rows(rows) = meal_list_view(&[meal]) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Egg");
        assert_eq!(rows[0].portion, "120г • 186 ккал");
        assert_eq!(rows[0].macros, "Б 15.6 | Ж 13.2 | У 1.3");
    }

    #[test]
    fn search_and_info_labels() {
        assert_eq!(search_row(&egg()).label, "Egg — 155 ккал");
        assert_eq!(
            dish_info(&egg()).macros,
            "155 ккал / 100г | Б 13 | Ж 11 | У 1.1"
        );
    }
}
