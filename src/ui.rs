use crate::render::{DishInfoView, MealListView, SearchRow, TotalsView};
use crate::view::{Dialog, Field, View};
use chrono::NaiveDate;
use std::io::{self, Write};

/// Line-oriented view printing every screen change to a writer.
pub struct TerminalView<W: Write> {
    out: W,
    add_meal_open: bool,
    create_dish_open: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            add_meal_open: false,
            create_dish_open: false,
        }
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::AddMeal => self.add_meal_open,
            Dialog::CreateDish => self.create_dish_open,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // A closed stdout is not worth failing the session over.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn set_open(&mut self, dialog: Dialog, open: bool) {
        match dialog {
            Dialog::AddMeal => self.add_meal_open = open,
            Dialog::CreateDish => self.create_dish_open = open,
        }
    }
}

fn dialog_title(dialog: Dialog) -> &'static str {
    match dialog {
        Dialog::AddMeal => "Добавить приём пищи",
        Dialog::CreateDish => "Новое блюдо",
    }
}

impl<W: Write> View for TerminalView<W> {
    fn set_date(&mut self, date: NaiveDate) {
        self.line(&format!("== {date} =="));
    }

    fn render_totals(&mut self, totals: &TotalsView) {
        self.line(&format!(
            "Ккал {} | Б {} | Ж {} | У {} | Клетчатка {}",
            totals.calories, totals.protein, totals.fat, totals.carbs, totals.fiber
        ));
    }

    fn render_meals(&mut self, meals: &MealListView) {
        match meals {
            MealListView::Placeholder(text) => self.line(&format!("  {text}")),
            MealListView::Rows(rows) => {
                for row in rows {
                    self.line(&format!("  {} — {} ({})", row.name, row.portion, row.macros));
                }
            }
        }
    }

    fn render_search_results(&mut self, rows: &[SearchRow]) {
        for (index, row) in rows.iter().enumerate() {
            self.line(&format!("  [{}] {}", index + 1, row.label));
        }
    }

    fn hide_search_results(&mut self) {}

    fn set_search_text(&mut self, _text: &str) {}

    fn clear_weight(&mut self) {}

    fn show_dish_info(&mut self, info: &DishInfoView) {
        self.line(&format!("Выбрано: {} ({})", info.name, info.macros));
    }

    fn hide_dish_info(&mut self) {}

    fn focus(&mut self, field: Field) {
        let hint = match field {
            Field::Search => "search <текст>",
            Field::Weight => "weight <граммы>",
        };
        self.line(&format!("> {hint}"));
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.set_open(dialog, true);
        self.line(&format!("[{}]", dialog_title(dialog)));
    }

    fn close_dialog(&mut self, dialog: Dialog) {
        self.set_open(dialog, false);
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("! {message}"));
    }

    fn show_error(&mut self, message: &str) {
        self.line(&format!("ошибка: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EMPTY_MEALS_PLACEHOLDER;

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn prints_placeholder_and_numbered_results() {
        let mut view = TerminalView::new(Vec::new());
        view.render_meals(&MealListView::Placeholder(EMPTY_MEALS_PLACEHOLDER));
        view.render_search_results(&[
            SearchRow {
                dish_id: 7,
                label: "Egg — 155 ккал".into(),
            },
            SearchRow {
                dish_id: 9,
                label: "Eggplant — 24 ккал".into(),
            },
        ]);

        let text = output(view);
        assert!(text.contains("Пока ничего не съедено"));
        assert!(text.contains("[1] Egg — 155 ккал"));
        assert!(text.contains("[2] Eggplant — 24 ккал"));
    }

    #[test]
    fn tracks_dialog_visibility() {
        let mut view = TerminalView::new(Vec::new());
        view.open_dialog(Dialog::AddMeal);
        assert!(view.is_open(Dialog::AddMeal));
        view.close_dialog(Dialog::AddMeal);
        view.open_dialog(Dialog::CreateDish);
        assert!(!view.is_open(Dialog::AddMeal));
        assert!(view.is_open(Dialog::CreateDish));
    }
}
