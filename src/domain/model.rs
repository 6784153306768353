/// Languages scanned, in the order they appear in the rendered tables.
pub const LANGUAGES: [&str; 10] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
    "Scala",
    "TypeScript",
];

/// Per-source location identifiers for one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityIds {
    pub hh_area_id: u32,
    pub sj_town_id: u32,
}

pub fn city_ids(city: &str) -> Option<CityIds> {
    match city {
        "Moscow" => Some(CityIds {
            hh_area_id: 1,
            sj_town_id: 4,
        }),
        _ => None,
    }
}

/// Aggregation result for one language on one source.
///
/// `vacancies_found` is the source's reported total for the search, while
/// `vacancies_processed` counts only vacancies that contributed a salary
/// estimate, so `vacancies_processed <= vacancies_found` is expected but
/// not guaranteed by the sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: i64,
}

#[derive(Debug, Clone)]
pub struct ReportRow {
    pub language: String,
    pub stats: LanguageStats,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
}
