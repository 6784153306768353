use crate::domain::model::LanguageStats;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;

pub const PAGE_SIZE: u32 = 100;

/// One page of search results, normalized across sources.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    /// Currency-gated salary estimate for each vacancy on the page.
    pub estimates: Vec<Option<f64>>,
    /// Whether the source reports further pages after this one.
    pub has_more: bool,
    /// The source's cumulative count of matching vacancies.
    pub total: u64,
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Source name used in report titles and error messages.
    fn name(&self) -> &str;

    /// Fetches one page of vacancies matching `search_text`. Page indices
    /// start at zero; the page size is always [`PAGE_SIZE`].
    async fn fetch_page(&self, search_text: &str, page: u32) -> Result<VacancyPage>;
}

/// Walks every result page for `search_text` and accumulates salary totals.
///
/// Estimates are truncated to whole currency units when accumulated and the
/// average uses integer division. `vacancies_found` is whatever total the
/// final page reported, not a running sum. Transport errors and non-success
/// statuses propagate immediately; there are no retries.
pub async fn aggregate<S: VacancySource + ?Sized>(
    source: &S,
    search_text: &str,
) -> Result<LanguageStats> {
    let mut processed: u64 = 0;
    let mut salary_sum: i64 = 0;
    let mut vacancies_found: u64 = 0;
    let mut page: u32 = 0;

    loop {
        let result = source.fetch_page(search_text, page).await?;
        tracing::debug!(
            "{}: page {} has {} vacancies (total {})",
            source.name(),
            page,
            result.estimates.len(),
            result.total
        );

        for value in result.estimates.into_iter().flatten() {
            processed += 1;
            salary_sum += value.trunc() as i64;
        }

        vacancies_found = result.total;
        if !result.has_more {
            break;
        }
        page += 1;
    }

    if processed == 0 {
        return Err(ReportError::NoSalaryData {
            source_name: source.name().to_string(),
            language: search_text.to_string(),
        });
    }

    Ok(LanguageStats {
        vacancies_found,
        vacancies_processed: processed,
        average_salary: salary_sum / processed as i64,
    })
}
