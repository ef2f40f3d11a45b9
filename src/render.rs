//! Plain-text presentation of snapshots.

use std::io::Write;

use crate::app::Presenter;
use crate::error::GameResult;
use crate::game::snapshot::Snapshot;
use crate::map::grid::Cell;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws each snapshot as a block of characters.
pub struct TextRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TextRenderer<W> {
    /// With `clear` set, each frame first clears the terminal.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) -> GameResult<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(render_frame(snapshot).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Renders a snapshot to text.
///
/// `@` is the player, `E` an enemy, `e` a frozen enemy, `$` a treasure and `*` a
/// power-up. When several things share a cell the first of those wins.
pub fn render_frame(snapshot: &Snapshot) -> String {
    if let Some(lines) = snapshot.intro {
        return lines.iter().map(|line| format!("{line}\n")).collect();
    }

    let size = snapshot.grid_size;
    let side = size as usize;
    let mut frame = String::with_capacity((side + 1) * side + 128);
    for row in 0..size {
        for col in 0..size {
            frame.push(glyph(snapshot, Cell::new(col, row)));
        }
        frame.push('\n');
    }

    if let Some(message) = snapshot.message {
        frame.push_str(message);
        frame.push('\n');
    }
    if let Some(stats) = snapshot.stats {
        frame.push_str(&stats.to_string());
        frame.push('\n');
    }
    frame
}

fn glyph(snapshot: &Snapshot, cell: Cell) -> char {
    if snapshot.player == cell {
        return '@';
    }
    if let Some(enemy) = snapshot.enemies.iter().find(|enemy| enemy.cell == cell) {
        return if enemy.frozen { 'e' } else { 'E' };
    }
    if snapshot.treasures.contains(&cell) {
        return '$';
    }
    if snapshot.power_ups.contains(&cell) {
        return '*';
    }
    '.'
}
