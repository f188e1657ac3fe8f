use chrono::Local;
use clap::Parser;

use sinchai::config::catalog::Catalog;
use sinchai::core::engine::{AdvisoryEngine, AdvisoryRequest, MoistureSource};
use sinchai::domain::model::{FieldGeometry, WeatherSample};
use sinchai::domain::ports::Storage;
use sinchai::export;
use sinchai::utils::{logger, validation::Validate};
use sinchai::{CliConfig, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sinchai advisory run");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog_file {
        Some(path) => {
            tracing::info!("Loading catalog override from {}", path);
            match Catalog::from_file(path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::error!("Catalog load failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Catalog::builtin(),
    };

    let request = AdvisoryRequest {
        soil: config.soil.clone(),
        stage: config.stage.clone(),
        field: FieldGeometry::new(config.area, config.area_unit.clone()),
        weather: WeatherSample {
            tmin_c: config.tmin,
            tmax_c: config.tmax,
        },
        moisture: match config.vwc {
            Some(vwc) => MoistureSource::Manual(vwc),
            None => MoistureSource::Simulated,
        },
        horizon_days: config.horizon,
        start_date: Local::now().date_naive(),
        seed: config.seed,
    };

    let engine = AdvisoryEngine::new(catalog);
    let report = match engine.run(&request) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Advisory run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.strict {
        for warning in &report.warnings {
            tracing::warn!("input check: {}: {}", warning.field, warning.message);
        }
    }

    println!("🌾 Crop: {} ({} stage, {} soil)", config.crop, report.stage, report.soil);
    println!("📐 Area: {:.0} m²", report.area_m2);
    println!("💧 Moisture (VWC): {:.2}", report.moisture.vwc);
    println!("Status: {}", report.advice.status);
    println!(
        "Today's water: {:.0} L (deficit {:.1} mm, ETc {:.1} mm)",
        report.advice.liters, report.advice.deficit_mm, report.advice.etc_mm
    );
    println!();
    println!("📅 {}-day irrigation plan:", report.plan.len());
    print!("{}", export::plan_to_table(&report.plan));

    let storage = LocalStorage::new(config.output_path.clone());
    for format in &config.formats {
        let (filename, content) = match format.as_str() {
            "csv" => ("irrigation_plan.csv", export::plan_to_csv(&report.plan)?),
            "json" => ("irrigation_report.json", export::report_to_json(&report)?),
            other => {
                // validate() already rejected anything else
                tracing::warn!("skipping unknown format {}", other);
                continue;
            }
        };
        storage.write_file(filename, content.as_bytes())?;
        tracing::info!("📁 Wrote {}/{}", config.output_path, filename);
    }

    println!();
    println!("✅ Plan exported to {}", config.output_path);

    Ok(())
}
