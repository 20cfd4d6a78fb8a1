use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use scoresync_types::{Difficulty, LeaderboardState};

use crate::state::AppState;

pub async fn record(
    state: &AppState,
    name: &str,
    score: i64,
    difficulty: Difficulty,
) -> Result<()> {
    match state.service.record_result(name, score, difficulty).await? {
        Some(id) => {
            println!(
                "{} Saved score {} ({}) as record #{}",
                "✓".green(),
                score,
                difficulty.label(),
                id
            );
            // Give the detached push a chance to finish before the process exits.
            let report = state.service.sync_now().await?;
            if report.network_failures > 0 {
                let pending = format!(
                    "{} record(s) will sync when the leaderboard is reachable",
                    report.network_failures
                );
                println!("{}", pending.yellow());
            }
        },
        None => println!("{}", "Score is not positive; nothing recorded.".yellow()),
    }
    Ok(())
}

pub async fn best(state: &AppState) -> Result<()> {
    let best = state.service.best_local_score().await?;
    println!("{} {}", "High score:".cyan().bold(), best);
    Ok(())
}

pub async fn leaderboard(state: &AppState, json: bool) -> Result<()> {
    let view = state.service.refresh_leaderboard().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view {
        LeaderboardState::Ready(entries) if entries.is_empty() => {
            println!("{}", "Leaderboard is empty.".yellow());
        },
        LeaderboardState::Ready(entries) => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["#", "Player", "Score", "Difficulty", "When"]);

            for (rank, entry) in entries.iter().enumerate() {
                let rank_cell = match rank {
                    0 => Cell::new("1").fg(Color::Yellow),
                    1 | 2 => Cell::new(rank + 1).fg(Color::Cyan),
                    _ => Cell::new(rank + 1),
                };
                table.add_row(vec![
                    rank_cell,
                    Cell::new(&entry.player_name),
                    Cell::new(entry.score),
                    Cell::new(entry.difficulty.label()),
                    Cell::new(entry.created_at.format("%Y-%m-%d %H:%M")),
                ]);
            }

            println!("{}", format!("Top {}", state.config.leaderboard_size).cyan().bold());
            println!("{table}");
        },
        LeaderboardState::Failed(reason) => {
            println!("{} Could not load leaderboard: {}", "✗".red(), reason);
        },
        LeaderboardState::Empty | LeaderboardState::Loading => {
            println!("{}", "Leaderboard not loaded.".yellow());
        },
    }
    Ok(())
}

pub async fn local(state: &AppState, limit: usize) -> Result<()> {
    let records = state.service.local_top(limit).await?;
    if records.is_empty() {
        println!("{}", "No local records.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Player", "Score", "Difficulty", "When", "Synced"]);

    for record in &records {
        let when = chrono::DateTime::from_timestamp_millis(record.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let synced = if record.synced {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("pending").fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.player_name),
            Cell::new(record.score),
            Cell::new(record.difficulty.label()),
            Cell::new(when),
            synced,
        ]);
    }

    println!("{table}");
    Ok(())
}

pub async fn sync(state: &AppState) -> Result<()> {
    let report = state.service.sync_now().await?;
    println!(
        "{} Synced {}/{} record(s)",
        if report.is_clean() { "✓".green() } else { "!".yellow() },
        report.synced,
        report.attempted
    );
    if report.network_failures > 0 {
        println!("  {} failed to reach the leaderboard", report.network_failures);
    }
    for (id, message) in &report.storage_faults {
        println!("  {} record #{} could not be marked synced: {}", "✗".red(), id, message);
    }
    Ok(())
}

pub async fn pending(state: &AppState) -> Result<()> {
    let pending = state.service.pending_sync_count().await?;
    println!("{} record(s) waiting for sync", pending);
    Ok(())
}

pub async fn reset(state: &AppState, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("Refusing to delete local records without --yes");
    }
    let deleted = state.service.reset_stats().await?;
    println!("{} Deleted {} local record(s)", "✓".green(), deleted);
    Ok(())
}
