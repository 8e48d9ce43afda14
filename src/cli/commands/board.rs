use crate::cli::parser::{BoardAction, Commands};
use crate::config::Config;
use crate::core::fields::norm_key;
use crate::db::board::{
    BOARD_COLUMNS, STAFF_BOARD, blank_board, column_totals, load_board, reset_board, save_board,
};
use crate::db::{DbPool, init_db};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::table::Table;
use std::io::{self, Write};

/// Handle the `board` subcommand: an editable staffing table persisted
/// in SQLite, seeded from the configured store list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Board { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        match action {
            BoardAction::Show => show(&mut pool)?,
            BoardAction::Set {
                store,
                column,
                value,
            } => set(&mut pool, cfg, store, column, value)?,
            BoardAction::Reset { yes } => reset(&mut pool, *yes)?,
        }
    }

    Ok(())
}

fn show(pool: &mut DbPool) -> AppResult<()> {
    let Some(rows) = load_board(&pool.conn, STAFF_BOARD)? else {
        messages::info("Board is empty. Use `hubdeck board set` to fill it in.");
        return Ok(());
    };

    let mut headers = vec!["Store".to_string()];
    headers.extend(BOARD_COLUMNS.iter().map(|c| c.to_string()));
    headers.push("Total".to_string());

    let mut table = Table::new(headers);
    for row in &rows {
        let row_total: i64 = row
            .iter()
            .skip(1)
            .map(|cell| cell.trim().parse::<i64>().unwrap_or(0))
            .sum();
        let mut display = row.clone();
        display.push(row_total.to_string());
        table.add_row(display);
    }

    let col_totals = column_totals(&rows);
    let mut total_row = vec!["Total".to_string()];
    total_row.extend(col_totals.iter().map(|t| t.to_string()));
    total_row.push(col_totals.iter().sum::<i64>().to_string());
    table.add_row(total_row);

    print!("{}", table.render());
    Ok(())
}

fn set(pool: &mut DbPool, cfg: &Config, store: &str, column: &str, value: &str) -> AppResult<()> {
    let mut rows = match load_board(&pool.conn, STAFF_BOARD)? {
        Some(rows) => rows,
        None => blank_board(&cfg.report_stores),
    };

    let store_norm = norm_key(store);
    let Some(row) = rows
        .iter_mut()
        .find(|r| r.first().is_some_and(|name| norm_key(name) == store_norm))
    else {
        return Err(AppError::UnknownStore(store.to_string()));
    };

    let col_idx = resolve_column(column)?;
    if row.len() < BOARD_COLUMNS.len() + 1 {
        row.resize(BOARD_COLUMNS.len() + 1, String::new());
    }
    row[col_idx + 1] = value.to_string();
    let store_name = row[0].clone();

    save_board(&pool.conn, STAFF_BOARD, &rows)?;
    messages::success(format!(
        "{store_name} / {} set to '{value}'",
        BOARD_COLUMNS[col_idx]
    ));
    Ok(())
}

fn reset(pool: &mut DbPool, yes: bool) -> AppResult<()> {
    if !yes {
        print!("Clear the saved board? [y/N]: ");
        io::stdout().flush().ok();

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let ans = answer.trim().to_ascii_lowercase();
        if ans != "y" && ans != "yes" {
            messages::info("Board left untouched.");
            return Ok(());
        }
    }

    reset_board(&pool.conn, STAFF_BOARD)?;
    messages::success("Board cleared.");
    Ok(())
}

/// Column by name (tolerant) or 1-based index.
fn resolve_column(column: &str) -> AppResult<usize> {
    if let Ok(n) = column.trim().parse::<usize>() {
        if (1..=BOARD_COLUMNS.len()).contains(&n) {
            return Ok(n - 1);
        }
        return Err(AppError::InvalidColumn(column.to_string()));
    }

    let wanted = norm_key(column);
    BOARD_COLUMNS
        .iter()
        .position(|c| norm_key(c) == wanted)
        .ok_or_else(|| AppError::InvalidColumn(column.to_string()))
}
