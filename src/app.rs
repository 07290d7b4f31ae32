use crate::api::HttpApi;
use crate::config::ClientConfig;
use crate::controller::Controller;
use crate::errors::ApiResult;
use crate::ui::TerminalView;
use chrono::{Local, NaiveDate};
use std::io::Stdout;

pub type TerminalController = Controller<HttpApi, TerminalView<Stdout>>;

pub fn build(config: &ClientConfig) -> ApiResult<TerminalController> {
    let api = HttpApi::new(config)?;
    Ok(Controller::new(api, TerminalView::stdout(), today()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
