use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::errors::AppResult;
use crate::export::write_records;
use crate::ingest::read_rows;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

/// Handle the `attendance` command: ingest a sheet, collapse it to one
/// row per worker per day, then print or export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        file,
        filter,
        export,
        format,
        force,
    } = cmd
    {
        let input = expand_tilde(file);
        let raw_rows = read_rows(&input)?;
        if raw_rows.is_empty() {
            messages::warning(format!("No data rows found in {}", input.display()));
            return Ok(());
        }

        let mut records = aggregate(&raw_rows, &cfg.allowed_hubs);

        if let Some(query) = filter {
            records.retain(|r| r.matches(query));
        }

        if records.is_empty() {
            messages::warning("No records matched (check hub allow-list and filter).");
            return Ok(());
        }

        if let Some(out) = export {
            let out_path = expand_tilde(out);
            write_records(&records, format, &out_path, *force)?;
            return Ok(());
        }

        let mut table = Table::new(vec![
            "Hub",
            "Worker",
            "Date",
            "CheckIn",
            "CheckOut",
            "WorkingTime",
        ]);
        for rec in &records {
            table.add_row(vec![
                rec.hub.clone(),
                rec.worker.clone(),
                rec.date.clone(),
                rec.check_in_display(),
                rec.check_out_display(),
                rec.work_time(),
            ]);
        }
        print!("{}", table.render());
        messages::info(format!("{} worker-day record(s)", records.len()));
    }

    Ok(())
}
