use crate::core::aggregate::{VacancyPage, VacancySource, PAGE_SIZE};
use crate::core::salary::estimate_salary;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru";

const API_KEY_HEADER: &str = "X-Api-App-Id";
/// Catalogue filter for software development vacancies.
const SOFTWARE_CATALOGUE_ID: u32 = 48;
const DOMESTIC_CURRENCY: &str = "rub";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    objects: Vec<Vacancy>,
    more: bool,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    currency: Option<String>,
    payment_from: Option<i64>,
    payment_to: Option<i64>,
}

pub struct SuperJobSource {
    client: Client,
    base_url: String,
    town_id: u32,
    secret_key: String,
}

impl SuperJobSource {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        town_id: u32,
        secret_key: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            town_id,
            secret_key,
        }
    }
}

fn estimate(vacancy: &Vacancy) -> Option<f64> {
    if vacancy.currency.as_deref() != Some(DOMESTIC_CURRENCY) {
        return None;
    }
    estimate_salary(vacancy.payment_from, vacancy.payment_to)
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "SuperJob"
    }

    async fn fetch_page(&self, search_text: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/2.2/vacancies", self.base_url);
        tracing::debug!("GET {} keyword={:?} page={}", url, search_text, page);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.secret_key)
            .query(&[
                ("town", self.town_id.to_string()),
                ("catalogues", SOFTWARE_CATALOGUE_ID.to_string()),
                ("count", PAGE_SIZE.to_string()),
                ("no_agreement", "1".to_string()),
                ("keyword", search_text.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(VacancyPage {
            estimates: parsed.objects.iter().map(estimate).collect(),
            has_more: parsed.more,
            total: parsed.total,
        })
    }
}
