mod canvas;
mod paint;
mod terminal;

use std::cell::Cell;
use std::fs::File;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{Duration, Instant};

use arrangement::{Arrangement, Config as GridConfig};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use griddom::{AnimationState, Color, Content, Document, Element, Event, Size, Style};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paint::paint;
use crate::terminal::Terminal;

const LOG_FILE: &str = "arrangement-tui.log";
const DEFAULT_TILES: usize = 12;
const TILE_WIDTH: i32 = 16;
const TILE_HEIGHT: i32 = 5;
const GAP: i32 = 1;

/// Poll interval while something is moving or a callback is pending.
const FRAME: Duration = Duration::from_millis(16);
const IDLE: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    match File::create(LOG_FILE) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create {LOG_FILE}: {e}"),
    }

    let tiles = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_TILES,
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            eprintln!("Usage: arrangement-tui [TILES]: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(tiles) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(tiles: usize) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = crossterm::terminal::size()?;
    let mut doc = Document::new(ui(tiles), i32::from(width), i32::from(height));

    let completed = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&completed);
    let config = GridConfig::new()
        .gap(GAP)
        .on_complete(move || counter.set(counter.get() + 1));

    // Fail before touching the screen so the report stays visible.
    let mut grid = Arrangement::new(config, &mut doc)?;
    log::info!("{} tiles in {} columns", tiles, grid.columns());

    let mut terminal = Terminal::new()?;
    let mut animation = AnimationState::new();
    set_status(&mut doc, &grid, completed.get());

    loop {
        let now = Instant::now();
        animation.update(doc.root(), now);
        terminal.draw(|canvas| paint(&mut doc, &animation, now, canvas))?;

        let timeout = if animation.has_active_transitions() || grid.is_dragging() {
            FRAME
        } else {
            grid.next_deadline()
                .map_or(IDLE, |due| due.saturating_duration_since(now).min(IDLE))
        };

        for raw in terminal.poll(timeout)? {
            if is_quit(&raw) {
                return Ok(());
            }
            if let Some(event) = Event::from_crossterm(&raw) {
                if grid.handle_event(&mut doc, &event, Instant::now()) {
                    set_status(&mut doc, &grid, completed.get());
                }
            }
        }

        if grid.poll_timers(Instant::now()) > 0 {
            log::debug!("{} drags completed", completed.get());
            set_status(&mut doc, &grid, completed.get());
        }
    }
}

fn is_quit(event: &CrosstermEvent) -> bool {
    matches!(
        event,
        CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        })
    )
}

fn set_status(doc: &mut Document, grid: &Arrangement, completed: usize) {
    let order: Vec<&str> = grid
        .order()
        .into_iter()
        .map(|id| id.trim_start_matches("tile-"))
        .collect();
    let text = format!(
        " {completed} drags completed | {} columns | order {}",
        grid.columns(),
        order.join(" ")
    );
    if let Some(status) = doc.element_mut("status") {
        status.content = Content::Text(text);
    }
}

fn ui(tiles: usize) -> Element {
    let items = (0..tiles).map(|i| {
        let hue = i as f32 * 360.0 / tiles.max(1) as f32;
        Element::box_()
            .id(format!("tile-{}", i + 1))
            .class("tile region")
            .width(Size::Fixed(TILE_WIDTH))
            .height(Size::Fixed(TILE_HEIGHT))
            .style(Style::new().background(Color::oklch(0.55, 0.12, hue)))
            .child(
                Element::text(format!(" Tile {}", i + 1))
                    .style(Style::new().foreground(Color::oklch(0.97, 0.01, hue))),
            )
    });

    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.18, 0.01, 250.0)))
        .child(
            Element::text(" Drag tiles with the mouse to reorder. q or Esc quits.")
                .style(Style::new().foreground(Color::oklch(0.9, 0.05, 250.0))),
        )
        .child(
            Element::text(" ")
                .id("status")
                .style(Style::new().foreground(Color::oklch(0.7, 0.02, 250.0))),
        )
        .child(Element::box_().id("shell").width(Size::Fill).children(items))
}
