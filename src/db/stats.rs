use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED DOCUMENTS
    //
    let mut stmt =
        conn.prepare("SELECT name, length(value), updated_at FROM kv_store ORDER BY name ASC")?;
    let docs = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    println!("{}• Stored documents:{}", CYAN, RESET);
    if docs.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (name, len, updated) in docs {
        println!(
            "    {:<16} {}{:>8} bytes{}  updated {}",
            name, GREEN, len, RESET, updated
        );
    }

    //
    // 3) LOG ENTRIES
    //
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    println!();
    Ok(())
}
