use crate::render::{DishInfoView, MealListView, SearchRow, TotalsView};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    AddMeal,
    CreateDish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Search,
    Weight,
}

/// Everything the controller can change on screen. Implementations only
/// draw; they never call back into the controller.
pub trait View {
    fn set_date(&mut self, date: NaiveDate);

    fn render_totals(&mut self, totals: &TotalsView);

    /// Replaces whatever the meal list showed before.
    fn render_meals(&mut self, meals: &MealListView);

    /// Replaces the result list and makes it visible.
    fn render_search_results(&mut self, rows: &[SearchRow]);

    fn hide_search_results(&mut self);

    fn set_search_text(&mut self, text: &str);

    fn clear_weight(&mut self);

    fn show_dish_info(&mut self, info: &DishInfoView);

    fn hide_dish_info(&mut self);

    fn focus(&mut self, field: Field);

    fn open_dialog(&mut self, dialog: Dialog);

    fn close_dialog(&mut self, dialog: Dialog);

    /// Blocking notice, used for form problems and confirmations.
    fn alert(&mut self, message: &str);

    /// A request failed; `message` is user-facing.
    fn show_error(&mut self, message: &str);
}
