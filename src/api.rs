use crate::config::ClientConfig;
use crate::errors::{ApiError, ApiResult};
use crate::models::{DailyStats, Dish, NewDish, NewMeal};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::warn;

/// The four endpoints of the food log server.
#[async_trait]
pub trait FoodApi: Send + Sync {
    async fn daily_stats(&self, date: NaiveDate) -> ApiResult<DailyStats>;

    async fn search_dishes(&self, query: &str) -> ApiResult<Vec<Dish>>;

    async fn create_meal(&self, meal: &NewMeal) -> ApiResult<()>;

    async fn create_dish(&self, dish: &NewDish) -> ApiResult<Dish>;
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(%status, "request rejected by server");
        return Err(ApiError::server(status, body));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait]
impl FoodApi for HttpApi {
    async fn daily_stats(&self, date: NaiveDate) -> ApiResult<DailyStats> {
        let request = self
            .client
            .get(self.url("/api/stats"))
            .query(&[("date", date.to_string())]);
        send_json(request).await
    }

    async fn search_dishes(&self, query: &str) -> ApiResult<Vec<Dish>> {
        let request = self.client.get(self.url("/api/dishes")).query(&[("q", query)]);
        send_json(request).await
    }

    async fn create_meal(&self, meal: &NewMeal) -> ApiResult<()> {
        let request = self.client.post(self.url("/api/meals")).json(meal);
        let _created: serde_json::Value = send_json(request).await?;
        Ok(())
    }

    async fn create_dish(&self, dish: &NewDish) -> ApiResult<Dish> {
        let request = self.client.post(self.url("/api/dishes")).json(dish);
        send_json(request).await
    }
}
