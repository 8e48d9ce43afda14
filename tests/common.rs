#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub fn hd() -> Command {
    cargo_bin_cmd!("hubdeck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hubdeck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small attendance CSV fixture and return its path.
pub fn attendance_fixture(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendance.csv", name));
    let p = path.to_string_lossy().to_string();

    let mut f = fs::File::create(&path).expect("create fixture");
    writeln!(f, "Hub Name,Worker Name,Work Date,Check-In Time,Check-Out Time").unwrap();
    writeln!(f, "Kalyan Nagar_mnow,Amit,25-11-2025,09:00,17:30").unwrap();
    writeln!(f, "Kalyan Nagar_mnow,Amit,25-11-2025,08:45,16:00").unwrap();
    writeln!(f, "Jakkur_mnow,Ravi,25-11-2025,10:00,18:00").unwrap();
    writeln!(f, "Somewhere Else,Zed,25-11-2025,09:00,17:00").unwrap();

    p
}

/// Write a small order sheet CSV fixture and return its path.
pub fn orders_fixture(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_orders.csv", name));
    let p = path.to_string_lossy().to_string();

    let mut f = fs::File::create(&path).expect("create fixture");
    writeln!(
        f,
        "Store Name,Order Status,Breached,Breached Duration (In Min),Order No,Order Date"
    )
    .unwrap();
    writeln!(f, "Kalyan Nagar_mnow,Delivered,no,,O-1,25-11-2025").unwrap();
    writeln!(f, "Kalyan Nagar_mnow,Delivered,yes,20,O-2,25-11-2025").unwrap();
    writeln!(f, "Kalyan Nagar_mnow,Attempted,no,,O-3,25-11-2025").unwrap();
    writeln!(f, "Jakkur_mnow,Cancelled by customer,no,,O-4,25-11-2025").unwrap();
    writeln!(f, "Jakkur_mnow,Delivered,yes,10,O-5,25-11-2025").unwrap();

    p
}
