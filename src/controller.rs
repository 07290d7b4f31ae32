use crate::api::FoodApi;
use crate::errors::{ApiError, ApiResult, ValidationError};
use crate::input::{DishForm, parse_weight};
use crate::models::{DailyStats, Dish, NewMeal};
use crate::render::{self, DISH_CREATED};
use crate::state::{SearchTicket, Sequencer, SessionState, StatsTicket};
use crate::view::{Dialog, Field, View};
use chrono::NaiveDate;
use tracing::{debug, error, info};

const MIN_QUERY_CHARS: usize = 2;

/// Network operations come in two halves: `begin_*` issues a ticket and
/// `apply_*` takes the response, dropping it if a newer request of the same
/// kind was issued since. The `async` methods run both halves back to back.
pub struct Controller<A, V> {
    api: A,
    view: V,
    session: SessionState,
    results: Vec<Dish>,
    searches: Sequencer,
    stats: Sequencer,
}

impl<A: FoodApi, V: View> Controller<A, V> {
    pub fn new(api: A, view: V, today: NaiveDate) -> Self {
        Self {
            api,
            view,
            session: SessionState::new(today),
            results: Vec::new(),
            searches: Sequencer::default(),
            stats: Sequencer::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn results(&self) -> &[Dish] {
        &self.results
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shows the session date in the picker and loads its stats.
    pub async fn init(&mut self) {
        self.view.set_date(self.session.date);
        self.load_stats().await;
    }

    pub async fn change_date(&mut self, date: NaiveDate) {
        self.session.date = date;
        self.view.set_date(date);
        self.load_stats().await;
    }

    pub async fn load_stats(&mut self) {
        let ticket = self.begin_stats();
        let result = self.api.daily_stats(ticket.date).await;
        self.apply_stats(ticket, result);
    }

    pub fn begin_stats(&mut self) -> StatsTicket {
        let date = self.session.date;
        info!(%date, "loading daily stats");
        StatsTicket {
            seq: self.stats.issue(),
            date,
        }
    }

    /// Returns `false` when the response was stale and dropped.
    pub fn apply_stats(&mut self, ticket: StatsTicket, result: ApiResult<DailyStats>) -> bool {
        if !self.stats.is_current(ticket.seq) {
            debug!(date = %ticket.date, "dropping stale stats response");
            return false;
        }

        match result {
            Ok(stats) => {
                let (totals, meals) = render::stats_view(&stats);
                self.view.render_totals(&totals);
                self.view.render_meals(&meals);
            }
            Err(err) => self.report("Не удалось загрузить статистику", &err),
        }
        true
    }

    pub async fn search_input(&mut self, query: &str) {
        let Some(ticket) = self.begin_search(query) else {
            return;
        };
        let result = self.api.search_dishes(&ticket.query).await;
        self.apply_search(ticket, result);
    }

    /// Short queries hide the result list and cancel any search in flight.
    /// The current selection is left alone.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            self.searches.invalidate();
            self.hide_results();
            return None;
        }

        debug!(chars = query.chars().count(), "searching dishes");
        Some(SearchTicket {
            seq: self.searches.issue(),
            query: query.to_string(),
        })
    }

    pub fn apply_search(&mut self, ticket: SearchTicket, result: ApiResult<Vec<Dish>>) -> bool {
        if !self.searches.is_current(ticket.seq) {
            debug!(query = %ticket.query, "dropping stale search response");
            return false;
        }

        match result {
            Ok(dishes) => {
                self.results = dishes;
                if self.results.is_empty() {
                    self.hide_results();
                } else {
                    let rows: Vec<_> = self.results.iter().map(render::search_row).collect();
                    self.view.render_search_results(&rows);
                }
            }
            Err(err) => self.report("Не удалось выполнить поиск", &err),
        }
        true
    }

    /// Picks row `index` of the last rendered search results.
    pub fn select_result(&mut self, index: usize) -> bool {
        match self.results.get(index).cloned() {
            Some(dish) => {
                self.select_dish(dish);
                true
            }
            None => false,
        }
    }

    pub fn select_dish(&mut self, dish: Dish) {
        self.searches.invalidate();
        self.hide_results();
        self.view.set_search_text(&dish.name);
        self.view.show_dish_info(&render::dish_info(&dish));
        self.view.focus(Field::Weight);
        self.session.selected_dish = Some(dish);
    }

    pub async fn confirm_meal(&mut self, weight_text: &str) {
        let Some(dish_id) = self.session.selected_dish.as_ref().map(|dish| dish.id) else {
            self.view.alert(&ValidationError::NoDishSelected.to_string());
            return;
        };
        let weight_g = match parse_weight(weight_text) {
            Ok(weight) => weight,
            Err(err) => {
                self.view.alert(&err.to_string());
                return;
            }
        };

        let meal = NewMeal {
            dish_id,
            weight_g,
            date: self.session.date,
        };
        match self.api.create_meal(&meal).await {
            Ok(()) => {
                info!(dish_id, weight_g, date = %meal.date, "meal logged");
                self.view.close_dialog(Dialog::AddMeal);
                self.reset_add_meal();
                self.load_stats().await;
            }
            Err(err) => self.report("Не удалось сохранить приём пищи", &err),
        }
    }

    /// Creates the dish and goes straight to weight entry for it.
    pub async fn create_dish(&mut self, form: &DishForm) {
        let new_dish = match form.validate() {
            Ok(dish) => dish,
            Err(err) => {
                self.view.alert(&err.to_string());
                return;
            }
        };

        match self.api.create_dish(&new_dish).await {
            Ok(dish) => {
                info!(dish_id = dish.id, name = %dish.name, "dish created");
                self.view.alert(DISH_CREATED);
                self.view.close_dialog(Dialog::CreateDish);
                self.view.open_dialog(Dialog::AddMeal);
                self.select_dish(dish);
            }
            Err(err) => self.report("Не удалось создать блюдо", &err),
        }
    }

    pub fn open_add_meal(&mut self) {
        self.view.open_dialog(Dialog::AddMeal);
        self.view.focus(Field::Search);
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        self.view.close_dialog(dialog);
    }

    pub fn open_create_dish(&mut self) {
        self.view.close_dialog(Dialog::AddMeal);
        self.view.open_dialog(Dialog::CreateDish);
    }

    /// Closes the add-meal dialog and forgets the pending dish.
    pub fn abandon_add_meal(&mut self) {
        self.view.close_dialog(Dialog::AddMeal);
        self.reset_add_meal();
    }

    fn reset_add_meal(&mut self) {
        self.searches.invalidate();
        self.session.selected_dish = None;
        self.view.clear_weight();
        self.view.set_search_text("");
        self.hide_results();
        self.view.hide_dish_info();
    }

    // Hidden rows cannot be picked.
    fn hide_results(&mut self) {
        self.results.clear();
        self.view.hide_search_results();
    }

    fn report(&mut self, action: &str, err: &ApiError) {
        error!("{action}: {err}");
        self.view.show_error(&format!("{action}: {}", failure_reason(err)));
    }
}

fn failure_reason(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "нет связи с сервером".to_string(),
        ApiError::Timeout => "сервер не ответил вовремя".to_string(),
        ApiError::Server { status, .. } => format!("ошибка сервера ({})", status.as_u16()),
        ApiError::Decode(_) => "некорректный ответ сервера".to_string(),
    }
}
