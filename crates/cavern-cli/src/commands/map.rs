use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::room_name;

pub fn run() -> Result<(), String> {
    let (graph, start) = super::build_world()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Items", "Riddle"]);

    for (id, room) in graph.rooms() {
        let name = if id == start {
            format!("{} (start)", room.name)
        } else {
            room.name.clone()
        };

        let exits = room
            .exits()
            .iter()
            .map(|e| format!("{} → {}", e.direction, room_name(&graph, e.target)))
            .collect::<Vec<_>>()
            .join("\n");

        let items = if room.items().is_empty() {
            "—".to_string()
        } else {
            room.items().join(", ")
        };

        let riddle = room
            .riddle()
            .map_or_else(|| "—".to_string(), |r| r.question().to_string());

        table.add_row(vec![name, exits, items, riddle]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", graph.len().to_string().bold());

    Ok(())
}
