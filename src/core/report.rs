use crate::core::aggregate::{aggregate, VacancySource};
use crate::domain::model::{Report, ReportRow};
use crate::utils::error::Result;

/// Builds one per-language summary report for a single source.
///
/// Languages are queried strictly in list order, one at a time; the first
/// failing aggregation aborts the whole report.
pub struct ReportBuilder<'a> {
    languages: &'a [&'a str],
    city: &'a str,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(languages: &'a [&'a str], city: &'a str) -> Self {
        Self { languages, city }
    }

    pub async fn build<S: VacancySource>(&self, source: &S) -> Result<Report> {
        let mut rows = Vec::with_capacity(self.languages.len());

        for language in self.languages {
            tracing::info!("{}: scanning {} vacancies", source.name(), language);
            let stats = aggregate(source, language).await?;
            tracing::debug!(
                "{}: {} -> found={} processed={} average={}",
                source.name(),
                language,
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary
            );
            rows.push(ReportRow {
                language: language.to_string(),
                stats,
            });
        }

        Ok(Report {
            title: format!("{} {}", source.name(), self.city),
            rows,
        })
    }
}
