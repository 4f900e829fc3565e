use std::{
    fmt::Display,
    io::{stdout, Write},
    time::Instant,
};

use crossterm::{cursor, terminal, QueueableCommand};
use otter_sls::{config::Config, reports::Step};

/// Steps between updates of the window.
const REFRESH_INTERVAL: usize = 128;

/// A few lines of stats, updated in place during a search.
pub struct StatsWindow {
    column: u16,
    bottom: u16,
    start: Instant,
}

#[derive(Debug, Clone, Copy)]
pub enum WindowItem {
    Restart,
    Flips,
    Satisfied,
    Time,
}

impl StatsWindow {
    /// Draws the window below the cursor, or nothing if the position of the cursor is unknown.
    pub fn new(config: &Config) -> Option<Self> {
        println!("c ALGORITHM {}", config.algorithm.value);
        println!("c THRESHOLD {}", config.threshold.value);
        println!("c RESTART");
        println!("c FLIPS");
        println!("c SATISFIED");
        println!("c TIME");

        let (_, bottom) = cursor::position().ok()?;

        Some(StatsWindow {
            column: 14,
            bottom,
            start: Instant::now(),
        })
    }

    fn get_offset(&self, item: WindowItem) -> (u16, u16) {
        let the_row = match item {
            WindowItem::Restart => self.bottom.saturating_sub(4),
            WindowItem::Flips => self.bottom.saturating_sub(3),
            WindowItem::Satisfied => self.bottom.saturating_sub(2),
            WindowItem::Time => self.bottom.saturating_sub(1),
        };
        (self.column, the_row)
    }

    #[allow(unused_must_use)]
    pub fn update_item(&self, item: WindowItem, output: impl Display) {
        let mut stdout = stdout();
        let (x, y) = self.get_offset(item);

        stdout.queue(cursor::SavePosition);
        stdout.queue(cursor::MoveTo(x, y));
        stdout.queue(terminal::Clear(terminal::ClearType::UntilNewLine));
        write!(stdout, "{output}");
        stdout.queue(cursor::RestorePosition);
    }

    /// Updates the window with a step, though only at intervals or on success.
    pub fn observe(&self, step: &Step) {
        if step.iteration % REFRESH_INTERVAL != 0 && step.satisfied != step.clause_count {
            return;
        }

        self.update_item(WindowItem::Restart, step.restart + 1);
        self.update_item(WindowItem::Flips, step.iteration);
        self.update_item(
            WindowItem::Satisfied,
            format!("{} / {}", step.satisfied, step.clause_count),
        );
        self.update_item(WindowItem::Time, format!("{:.2?}", self.start.elapsed()));
        self.flush();
    }

    pub fn flush(&self) {
        let _ = stdout().flush();
    }
}
