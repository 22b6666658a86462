//! Schema generator for picklist stores.
//!
//! Prints SQLite DDL for the tables the picking queries read, optionally
//! followed by a small demo data set.
//!
//! Usage:
//!   cargo run --bin schema_gen -- ddl     # Schema only (default)
//!   cargo run --bin schema_gen -- demo    # Schema plus demo data
//!
//!   cargo run --bin schema_gen -- demo | sqlite3 demo.db
//!   cargo run --bin picklist -- 1001,1002,1003 --database demo.db

use picklist::store::schema::{DEMO_DATA_SQL, SCHEMA_SQL};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn write_sql(out: &mut impl Write, with_demo: bool) -> io::Result<()> {
    writeln!(out, "-- picklist store schema")?;
    out.write_all(SCHEMA_SQL.as_bytes())?;
    if with_demo {
        writeln!(out)?;
        writeln!(out, "-- demo data")?;
        out.write_all(DEMO_DATA_SQL.as_bytes())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let target = args.get(1).map(|s| s.as_str()).unwrap_or("ddl");

    let with_demo = match target {
        "ddl" => false,
        "demo" => true,
        _ => {
            eprintln!("Usage: schema_gen [ddl|demo]");
            eprintln!("  ddl   - Print the store schema (default)");
            eprintln!("  demo  - Print the schema followed by demo data");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_sql(&mut out, with_demo) {
        eprintln!("Error writing schema: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
