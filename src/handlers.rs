use crate::api::FoodApi;
use crate::controller::Controller;
use crate::input::DishForm;
use crate::view::{Dialog, View};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use std::num::NonZeroUsize;

/// One line typed into the terminal.
#[derive(Debug, Parser)]
#[command(name = "food_log", no_binary_name = true, disable_version_flag = true)]
#[command(help_template = "{subcommands}")]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show another day (YYYY-MM-DD)
    Date { date: NaiveDate },

    /// Reload the totals for the current day
    Stats,

    /// Open the add-meal dialog
    Add,

    /// Search the dish catalog
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Select result number N of the last search
    Pick { n: NonZeroUsize },

    /// Log the selected dish with this weight in grams
    Weight {
        #[arg(default_value = "", allow_hyphen_values = true)]
        grams: String,
    },

    /// Open the create-dish dialog
    New,

    /// Create a dish (per 100g) and select it
    Dish {
        #[arg(long, default_value = "")]
        kcal: String,
        #[arg(long, default_value = "")]
        protein: String,
        #[arg(long, default_value = "")]
        fat: String,
        #[arg(long, default_value = "")]
        carbs: String,
        #[arg(long, default_value = "")]
        fiber: String,
        #[arg(num_args = 0.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Close open dialogs
    Close,

    /// Drop the dish being added
    Cancel,

    /// Leave
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Blank lines yield `Ok(None)`. `help` and bad input come back as a
/// `clap::Error` whose display text is meant for the user.
pub fn parse_command(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    Line::try_parse_from(words).map(|line| Some(line.command))
}

pub fn help() -> String {
    Line::command().render_help().to_string()
}

pub async fn dispatch<A: FoodApi, V: View>(
    controller: &mut Controller<A, V>,
    command: Command,
) -> Flow {
    match command {
        Command::Date { date } => controller.change_date(date).await,
        Command::Stats => controller.load_stats().await,
        Command::Add => controller.open_add_meal(),
        Command::Search { words } => controller.search_input(&words.join(" ")).await,
        Command::Pick { n } => {
            if !controller.select_result(n.get() - 1) {
                controller
                    .view_mut()
                    .alert(&format!("Нет результата с номером {n}"));
            }
        }
        Command::Weight { grams } => controller.confirm_meal(&grams).await,
        Command::New => controller.open_create_dish(),
        Command::Dish {
            kcal,
            protein,
            fat,
            carbs,
            fiber,
            name,
        } => {
            let form = DishForm {
                name: name.join(" "),
                calories: kcal,
                protein,
                fat,
                carbs,
                fiber,
            };
            controller.create_dish(&form).await;
        }
        Command::Close => {
            controller.close_dialog(Dialog::AddMeal);
            controller.close_dialog(Dialog::CreateDish);
        }
        Command::Cancel => controller.abandon_add_meal(),
        Command::Quit => return Flow::Exit,
    }
    Flow::Continue
}
