//! `chronod` — line-oriented adapter for the stopwatch engine. Stands in for
//! the widget's button and keyboard layer: one command per line, rendered
//! snapshot after each command, raw JSON snapshot on demand.

use anyhow::Result;
use chronos_clock::{format, StopwatchController, StopwatchSnapshot};
use log::info;
use tokio::io::{self, AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("chronod starting up...");

    let controller = StopwatchController::new();

    println!("commands: start | pause | resume | reset | lap | json | quit");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "start" => controller.start().await,
            "pause" => controller.pause().await,
            "resume" => controller.resume().await,
            "reset" => controller.reset().await,
            "lap" => controller.lap().await,
            "json" => {
                let snapshot = controller.snapshot().await;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                continue;
            }
            "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        }
        render(controller.snapshot().await);
    }

    controller.shutdown().await;
    Ok(())
}

fn render(snapshot: StopwatchSnapshot) {
    println!(
        "{}  [{}]",
        format::format_clock(snapshot.time),
        snapshot.state.as_str()
    );
    for lap in &snapshot.laps {
        let marker = if Some(lap.id) == snapshot.best_lap_id {
            "  best"
        } else if Some(lap.id) == snapshot.worst_lap_id {
            "  worst"
        } else {
            ""
        };
        println!(
            "  #{:<3} {:>9}  {:>9}{}",
            lap.lap_number,
            format::format_lap(lap.lap_time),
            format::format_lap(lap.total_time),
            marker
        );
    }
}
