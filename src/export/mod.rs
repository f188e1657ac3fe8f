use crate::core::engine::AdvisoryReport;
use crate::domain::model::DailyForecastEntry;
use crate::utils::error::Result;

/// Date format used in the exported plan table.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Render the forecast as a character-separated table.
///
/// Column contract: `date` (DD-MM-YYYY), `etc_mm` (2 decimals),
/// `liters_needed` (2 decimals). Downstream consumers parse these headers;
/// keep them stable.
pub fn plan_to_csv(plan: &[DailyForecastEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "etc_mm", "liters_needed"])?;

    for entry in plan {
        writer.write_record([
            entry.date.format(DATE_FORMAT).to_string(),
            format!("{:.2}", entry.etc_mm),
            format!("{:.2}", entry.liters_needed),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Serialize the full report (advice, plan and any warnings) as pretty JSON.
pub fn report_to_json(report: &AdvisoryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Plain-text rendering of the plan for terminal display.
pub fn plan_to_table(plan: &[DailyForecastEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>10} {:>16}\n",
        "date", "etc (mm)", "water (liters)"
    ));
    for entry in plan {
        out.push_str(&format!(
            "{:<12} {:>10.2} {:>16.2}\n",
            entry.date.format(DATE_FORMAT),
            entry.etc_mm,
            entry.liters_needed
        ));
    }
    out
}
