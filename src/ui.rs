#![cfg(feature = "std")]

use crate::board::{Cell, Grid};
use crate::common::ShotOutcome;
use crate::config::BoardSize;
use crate::game::ShotReport;
use crate::player::Player;

const GAP: &str = "      ";

/// Column letter for `x`.
pub fn column_label(x: usize) -> char {
    (b'A' + x as u8) as char
}

/// Human readable coordinate, e.g. `B7`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    format!("{}{}", column_label(x), y + 1)
}

/// Parse a target such as `B7`, `b 7` or `2 7` into zero-based (x, y).
/// Range checks are left to the game.
pub fn parse_target(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let x = parse_column(a)?;
        let y: usize = b.parse().ok()?;
        return Some((x, y.checked_sub(1)?));
    }
    let mut chars = input.chars();
    let col = chars.next()?;
    if !col.is_ascii_alphabetic() {
        return None;
    }
    let y: usize = chars.as_str().parse().ok()?;
    Some((col.to_ascii_uppercase() as usize - 'A' as usize, y.checked_sub(1)?))
}

fn parse_column(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some(c.to_ascii_uppercase() as usize - 'A' as usize)
        }
        _ => s.parse::<usize>().ok()?.checked_sub(1),
    }
}

/// Grid drawn with column letters on top and row numbers on the left.
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    let size = grid.size();
    let num_len = if size.width() < 10 { 1 } else { 2 };
    let letters: Vec<String> = (0..size.length())
        .map(|x| column_label(x).to_string())
        .collect();
    let mut rows = vec![format!("{} {}", " ".repeat(num_len), letters.join(" "))];
    for y in 0..size.width() {
        let cells: Vec<String> = grid
            .row(y)
            .into_iter()
            .flatten()
            .map(|c| c.symbol().to_string())
            .collect();
        rows.push(format!("{:>width$} {}", y + 1, cells.join(" "), width = num_len));
    }
    rows
}

/// Map and radar side by side, centred on a screen `screen_width` wide.
pub fn display(player: &Player, screen_width: usize) -> String {
    let map = grid_rows(player.board().map());
    let radar = grid_rows(player.board().radar());
    let rows: Vec<String> = map
        .iter()
        .zip(radar.iter())
        .map(|(m, r)| format!("{}{}{}", m, GAP, r))
        .collect();
    let line_len = rows.first().map_or(0, |r| r.chars().count());
    let padding = " ".repeat(screen_width.saturating_sub(line_len) / 2);
    rows.iter()
        .map(|r| format!("{}{}", padding, r))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn legend() -> Vec<String> {
    vec![
        "+------------+".to_string(),
        format!("|   ship: {}  |", Cell::Ship.symbol()),
        format!("|    hit: {}  |", Cell::Hit.symbol()),
        format!("|  water: {}  |", Cell::Water.symbol()),
        "+------------+".to_string(),
    ]
}

/// Counters shown under the board.
pub fn status_line(player: &Player) -> String {
    format!(
        "{}: shots {}, hits {}, ships afloat {}",
        player.name(),
        player.shots_made(),
        player.hits_made(),
        player.ships_alive()
    )
}

/// Advisory text describing `report` from the point of view of player `viewer`.
pub fn shot_message(report: &ShotReport, viewer: usize) -> &'static str {
    let own = report.shooter == viewer;
    if let Some(winner) = report.winner {
        return if winner == viewer { "You win!" } else { "You lose!" };
    }
    match (report.accepted, report.outcome, own) {
        (false, _, true) => "Invalid target, try again",
        (false, _, false) => "",
        (true, Some(ShotOutcome::Miss), true) => "You missed",
        (true, Some(ShotOutcome::Miss), false) => "Enemy missed",
        (true, Some(ShotOutcome::Hit), true) => "Hit! Shoot again",
        (true, Some(ShotOutcome::Hit), false) => "Enemy hit your ship",
        (true, Some(ShotOutcome::Kill(_)), true) => "Ship destroyed! Shoot again",
        (true, Some(ShotOutcome::Kill(_)), false) => "Enemy destroyed your ship",
        (true, None, _) => "",
    }
}

/// Range hint printed when a target cannot be parsed.
pub fn target_hint(size: BoardSize) -> String {
    format!(
        "Enter a target like B7 (columns A-{}, rows 1-{}), or q to save and quit",
        column_label(size.length() - 1),
        size.width()
    )
}
