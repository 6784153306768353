use anyhow::Context;
use clap::Parser;
use vacancy_report::config::CliConfig;
use vacancy_report::core::report::ReportBuilder;
use vacancy_report::core::sources::hh::HhSource;
use vacancy_report::core::sources::superjob::SuperJobSource;
use vacancy_report::domain::model::LANGUAGES;
use vacancy_report::utils::{logger, table, validation::Validate};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vacancy-report for {}", config.city);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Report generation failed: {:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let ids = config.city_ids()?;

    let client = reqwest::Client::new();
    let builder = ReportBuilder::new(&LANGUAGES, &config.city);

    let hh = HhSource::new(client.clone(), config.hh_base_url.as_str(), ids.hh_area_id);
    let report = builder
        .build(&hh)
        .await
        .context("building the HeadHunter report")?;
    println!("{}", table::render(&report));
    println!();

    let superjob = SuperJobSource::new(
        client,
        config.superjob_base_url.as_str(),
        ids.sj_town_id,
        config.superjob_secret_key.clone(),
    );
    let report = builder
        .build(&superjob)
        .await
        .context("building the SuperJob report")?;
    println!("{}", table::render(&report));
    println!();

    Ok(())
}
