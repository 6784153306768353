use httpmock::prelude::*;
use vacancy_report::core::report::ReportBuilder;
use vacancy_report::core::sources::hh::HhSource;
use vacancy_report::core::sources::superjob::SuperJobSource;
use vacancy_report::utils::table;
use vacancy_report::ReportError;

#[tokio::test]
async fn test_hh_report_single_page_mixed_currencies() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Python")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "found": 3,
                "pages": 1,
                "items": [
                    {"salary": {"currency": "RUR", "from": 100000, "to": 200000}},
                    {"salary": {"currency": "USD", "from": 500, "to": 1000}},
                    {"salary": {"currency": "RUR", "from": 0, "to": 150000}}
                ]
            }));
    });

    let source = HhSource::new(reqwest::Client::new(), server.base_url(), 1);
    let report = ReportBuilder::new(&["Python"], "Moscow")
        .build(&source)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(report.title, "HeadHunter Moscow");

    // Midpoint 150000 plus 150000 * 0.8 = 120000; the USD vacancy is gated out.
    let stats = report.rows[0].stats;
    assert_eq!(stats.vacancies_found, 3);
    assert_eq!(stats.vacancies_processed, 2);
    assert_eq!(stats.average_salary, 135_000);
}

#[tokio::test]
async fn test_hh_report_walks_all_pages() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Java")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "found": 102,
                "pages": 2,
                "items": [
                    {"salary": {"currency": "RUR", "from": 100000, "to": null}}
                ]
            }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Java")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "found": 102,
                "pages": 2,
                "items": [
                    {"salary": {"currency": "RUR", "from": 120000, "to": 200000}}
                ]
            }));
    });

    let source = HhSource::new(reqwest::Client::new(), server.base_url(), 1);
    let report = ReportBuilder::new(&["Java"], "Moscow")
        .build(&source)
        .await
        .unwrap();

    first.assert();
    second.assert();

    // 100000 * 1.2 = 120000 and midpoint 160000, averaged to 140000.
    let stats = report.rows[0].stats;
    assert_eq!(stats.vacancies_found, 102);
    assert_eq!(stats.vacancies_processed, 2);
    assert_eq!(stats.average_salary, 140_000);
}

#[tokio::test]
async fn test_superjob_report_walks_all_pages() -> anyhow::Result<()> {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/2.2/vacancies")
            .query_param("keyword", "C++")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "total": 101,
                "more": true,
                "objects": [
                    {"currency": "rub", "payment_from": 100000, "payment_to": 140000}
                ]
            }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/2.2/vacancies")
            .query_param("keyword", "C++")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "total": 101,
                "more": false,
                "objects": [
                    {"currency": "rub", "payment_from": 150000, "payment_to": null}
                ]
            }));
    });

    let source = SuperJobSource::new(
        reqwest::Client::new(),
        server.base_url(),
        4,
        "test-key".to_string(),
    );
    let report = ReportBuilder::new(&["C++"], "Moscow").build(&source).await?;

    // Each page fetched exactly once; the loop stops at more == false.
    first.assert();
    second.assert();

    // Midpoint 120000 and 150000 * 1.2 = 180000, averaged to 150000.
    let stats = report.rows[0].stats;
    assert_eq!(stats.vacancies_found, 101);
    assert_eq!(stats.vacancies_processed, 2);
    assert_eq!(stats.average_salary, 150_000);
    Ok(())
}

#[tokio::test]
async fn test_superjob_report_empty_result_fails() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/2.2/vacancies")
            .query_param("keyword", "JavaScript")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"total": 0, "more": false, "objects": []}));
    });

    let source = SuperJobSource::new(
        reqwest::Client::new(),
        server.base_url(),
        4,
        "test-key".to_string(),
    );
    let err = ReportBuilder::new(&["JavaScript"], "Moscow")
        .build(&source)
        .await
        .unwrap_err();

    mock.assert();
    match err {
        ReportError::NoSalaryData {
            source_name,
            language,
        } => {
            assert_eq!(source_name, "SuperJob");
            assert_eq!(language, "JavaScript");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_superjob_report_two_languages_rendered() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/2.2/vacancies")
            .query_param("keyword", "Python");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "total": 5,
                "more": false,
                "objects": [
                    {"currency": "rub", "payment_from": 90000, "payment_to": 110000}
                ]
            }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/2.2/vacancies")
            .query_param("keyword", "Go");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "total": 7,
                "more": false,
                "objects": [
                    {"currency": "rub", "payment_from": 200000, "payment_to": null}
                ]
            }));
    });

    let source = SuperJobSource::new(
        reqwest::Client::new(),
        server.base_url(),
        4,
        "test-key".to_string(),
    );
    let report = ReportBuilder::new(&["Python", "Go"], "Moscow")
        .build(&source)
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].language, "Python");
    assert_eq!(report.rows[0].stats.average_salary, 100_000);
    assert_eq!(report.rows[1].language, "Go");
    assert_eq!(report.rows[1].stats.average_salary, 240_000);

    let rendered = table::render(&report);
    assert!(rendered.starts_with("+SuperJob Moscow"));
    assert!(rendered.contains("100000"));
    assert!(rendered.contains("240000"));
}

#[tokio::test]
async fn test_hh_server_error_aborts_report() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(500);
    });

    let source = HhSource::new(reqwest::Client::new(), server.base_url(), 1);
    let err = ReportBuilder::new(&["Ruby"], "Moscow")
        .build(&source)
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::ApiError(_)));
}
