use crate::core::aggregate::{VacancyPage, VacancySource, PAGE_SIZE};
use crate::core::salary::estimate_salary;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

/// The API rejects requests without a User-Agent.
const USER_AGENT: &str = "vacancy-report";
/// Professional role filter for software development vacancies.
const SOFTWARE_ROLE_ID: u32 = 96;
const LOOKBACK_DAYS: u32 = 30;
const DOMESTIC_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<Vacancy>,
    pages: u32,
    found: u64,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    currency: Option<String>,
    from: Option<i64>,
    to: Option<i64>,
}

pub struct HhSource {
    client: Client,
    base_url: String,
    area_id: u32,
}

impl HhSource {
    pub fn new(client: Client, base_url: impl Into<String>, area_id: u32) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            area_id,
        }
    }
}

fn estimate(vacancy: &Vacancy) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(DOMESTIC_CURRENCY) {
        return None;
    }
    estimate_salary(salary.from, salary.to)
}

#[async_trait]
impl VacancySource for HhSource {
    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn fetch_page(&self, search_text: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!("GET {} text={:?} page={}", url, search_text, page);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("area", self.area_id.to_string()),
                ("professional_role", SOFTWARE_ROLE_ID.to_string()),
                ("period", LOOKBACK_DAYS.to_string()),
                ("only_with_salary", "true".to_string()),
                ("per_page", PAGE_SIZE.to_string()),
                ("text", search_text.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(VacancyPage {
            estimates: parsed.items.iter().map(estimate).collect(),
            has_more: page + 1 < parsed.pages,
            total: parsed.found,
        })
    }
}
