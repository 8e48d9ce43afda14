use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classify::classify;
use crate::core::metrics::derive_report;
use crate::data::entry_for;
use crate::errors::{AppError, AppResult};
use crate::ingest::read_rows;
use crate::models::metrics::MetricsReport;
use crate::models::orders::OrderTallies;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use chrono::{Datelike, Local, NaiveDate, Timelike};

/// Handle the `report` command: classify an order sheet, scale the day's
/// projections to the chosen hour and print the merged metrics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        date,
        time,
        deep_pain,
    } = cmd
    {
        let input = expand_tilde(file);
        let raw_rows = read_rows(&input)?;
        if raw_rows.is_empty() {
            messages::warning(format!("No data rows found in {}", input.display()));
            return Ok(());
        }

        let tallies = classify(&raw_rows, &cfg.report_stores);

        let day = resolve_date(date.as_deref())?;
        let hour = resolve_hour(time.as_deref())?;

        let entry = entry_for(day);
        let report = derive_report(entry, day.weekday(), hour, &tallies);

        messages::header(format!(
            "Report for {} ({}) till {}",
            day.format("%d-%m-%Y"),
            entry.day,
            report.hour_label
        ));
        print_summary(&tallies);
        println!();
        print_metrics(&report);

        if *deep_pain {
            println!();
            print_deep_pain(&tallies);
        }
    }

    Ok(())
}

pub(crate) fn resolve_date(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.to_string())),
    }
}

/// Accepts "HH:MM", "HH:MM:SS" or a bare hour.
pub(crate) fn resolve_hour(arg: Option<&str>) -> AppResult<u32> {
    match arg {
        None => Ok(Local::now().hour()),
        Some(s) => {
            let hour_part = s.split(':').next().unwrap_or(s);
            let hour: u32 = hour_part
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidTime(s.to_string()))?;
            if hour > 23 {
                return Err(AppError::InvalidTime(s.to_string()));
            }
            Ok(hour)
        }
    }
}

fn print_summary(tallies: &OrderTallies) {
    let mut table = Table::new(vec![
        "Store",
        "Total",
        "Delivered",
        "Attempted",
        "Cancelled",
        "DeepPain",
    ]);
    for t in &tallies.stores {
        table.add_row(vec![
            t.store.clone(),
            t.total.to_string(),
            t.delivered.to_string(),
            t.attempted.to_string(),
            t.cancelled.to_string(),
            t.deep_pain.to_string(),
        ]);
    }
    let total = tallies.totals();
    table.add_row(vec![
        total.store,
        total.total.to_string(),
        total.delivered.to_string(),
        total.attempted.to_string(),
        total.cancelled.to_string(),
        total.deep_pain.to_string(),
    ]);
    print!("{}", table.render());
}

fn print_metrics(report: &MetricsReport) {
    let mut table = Table::new(vec![
        "Store",
        "FullDay",
        "Projected",
        "Buffer",
        "Attainment%",
        "Cancelled%",
        "DeepPain%",
        "Additional",
        "ActualDeepPain%",
    ]);
    for row in &report.rows {
        table.add_row(vec![
            row.store.clone(),
            row.full_day_projection.to_string(),
            row.projected.to_string(),
            row.buffered.to_string(),
            format!("{:.2}", row.attainment_pct),
            format!("{:.2}", row.cancelled_pct),
            format!("{:.2}", row.deep_pain_pct),
            row.additional_orders.to_string(),
            format!("{:.2}", row.actual_deep_pain_pct),
        ]);
    }
    let t = &report.totals;
    table.add_row(vec![
        "Total".to_string(),
        t.full_day_projection.to_string(),
        t.projected.to_string(),
        t.buffered.to_string(),
        format!("{:.2}", t.attainment_pct),
        format!("{:.2}", t.cancelled_pct),
        format!("{:.2}", t.deep_pain_pct),
        t.additional_orders.to_string(),
        format!("{:.2}", t.actual_deep_pain_pct),
    ]);
    print!("{}", table.render());
}

fn print_deep_pain(tallies: &OrderTallies) {
    if tallies.deep_pain_orders.is_empty() {
        messages::info("No deep-pain orders.");
        return;
    }

    let mut table = Table::new(vec![
        "OrderNo",
        "OrderDate",
        "Store",
        "Breached",
        "Duration(min)",
    ]);
    for o in &tallies.deep_pain_orders {
        table.add_row(vec![
            o.order_no.clone(),
            o.order_date.clone(),
            o.store.clone(),
            o.breached.clone(),
            o.breached_duration.clone(),
        ]);
    }
    print!("{}", table.render());
    messages::info(format!(
        "{} deep-pain order(s)",
        tallies.deep_pain_orders.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_argument_must_be_iso() {
        assert!(resolve_date(Some("2025-11-25")).is_ok());
        assert!(resolve_date(Some("25-11-2025")).is_err());
    }

    #[test]
    fn hour_accepts_colon_forms_and_bare_hours() {
        assert_eq!(resolve_hour(Some("11:30")).unwrap(), 11);
        assert_eq!(resolve_hour(Some("11:30:15")).unwrap(), 11);
        assert_eq!(resolve_hour(Some("9")).unwrap(), 9);
        assert!(resolve_hour(Some("24")).is_err());
        assert!(resolve_hour(Some("noon")).is_err());
    }
}
