use crate::cli::commands::report::{resolve_date, resolve_hour};
use crate::cli::parser::Commands;
use crate::core::metrics::scale_projection;
use crate::data::{entry_for, hour_fraction};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;
use chrono::Datelike;

/// Handle the `projection` command: show the planning numbers for a date
/// scaled to an hour of day, without needing an order sheet.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Projection { date, time } = cmd {
        let day = resolve_date(date.as_deref())?;
        let hour = resolve_hour(time.as_deref())?;

        let entry = entry_for(day);
        let (label, percent) = hour_fraction(day.weekday(), hour);

        messages::header(format!(
            "Projection for {} ({}) till {} ({percent:.2}% of day)",
            day.format("%d-%m-%Y"),
            entry.day,
            label
        ));
        if entry.date != day.format("%-m/%-d/%Y").to_string() {
            messages::warning(format!(
                "No projection for the exact date, using {}",
                entry.date
            ));
        }

        let mut table = Table::new(vec!["Store", "FullDay", "Projected", "Buffer"]);
        let mut total_projected: u64 = 0;
        let mut total_buffer: u64 = 0;

        for (store, full_day) in entry.stores {
            let (projected, buffer) = scale_projection(*full_day, percent);
            total_projected += projected;
            total_buffer += buffer;

            table.add_row(vec![
                store.to_string(),
                full_day.to_string(),
                projected.to_string(),
                buffer.to_string(),
            ]);
        }

        table.add_row(vec![
            "Total".to_string(),
            entry.total.to_string(),
            total_projected.to_string(),
            total_buffer.to_string(),
        ]);

        print!("{}", table.render());
    }

    Ok(())
}
