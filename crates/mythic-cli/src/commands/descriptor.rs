use comfy_table::{ContentArrangement, Table};
use mythic_oracle::tables::{MAX_DRAW, draw};
use mythic_oracle::{TABLES, find_table};

pub fn run(table: &str, count: Option<i64>) -> Result<(), String> {
    if table.eq_ignore_ascii_case("list") {
        list();
        return Ok(());
    }

    let count = match count {
        None => 1,
        Some(n) if (1..=MAX_DRAW as i64).contains(&n) => n as usize,
        Some(_) => return Err(format!("count must be between 1 and {MAX_DRAW}")),
    };
    let table = find_table(table).map_err(|e| e.to_string())?;
    for word in draw(table, count, &mut rand::rng()) {
        println!("{word}");
    }
    Ok(())
}

fn list() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries", "Contents"]);
    for t in TABLES {
        table.add_row(vec![
            t.name.to_string(),
            t.entries.len().to_string(),
            t.summary.to_string(),
        ]);
    }
    println!("{table}");
}
