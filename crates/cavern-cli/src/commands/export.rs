use cavern_core::{RoomGraph, RoomId};

use super::room_name;

pub fn run(format: &str) -> Result<(), String> {
    let (graph, start) = super::build_world()?;

    let content = match format {
        "json" => export_json(&graph, start)?,
        "markdown" | "md" => export_markdown(&graph, start),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    print!("{content}");
    Ok(())
}

fn export_json(graph: &RoomGraph, start: RoomId) -> Result<String, String> {
    let rooms: Vec<_> = graph
        .rooms()
        .map(|(id, room)| {
            serde_json::json!({
                "id": id,
                "room": room,
            })
        })
        .collect();

    let export = serde_json::json!({
        "start": start,
        "rooms": rooms,
    });

    serde_json::to_string_pretty(&export)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(graph: &RoomGraph, start: RoomId) -> String {
    let mut out = String::from("# Cavern\n\n");
    out.push_str(&format!("Start: **{}**\n", room_name(graph, start)));

    for (_, room) in graph.rooms() {
        out.push_str(&format!("\n## {}\n\n{}\n\n", room.name, room.description));

        for exit in room.exits() {
            out.push_str(&format!(
                "- {}: {}\n",
                exit.direction,
                room_name(graph, exit.target)
            ));
        }
        if !room.items().is_empty() {
            out.push_str(&format!("- Items: {}\n", room.items().join(", ")));
        }
        if let Some(riddle) = room.riddle() {
            out.push_str(&format!("- Riddle: {}\n", riddle.question()));
        }
    }

    out
}
