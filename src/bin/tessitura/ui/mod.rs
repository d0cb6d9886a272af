//! TUI module for tessitura
//!
//! Draws the range chart and stands in for mouse hover with a keyboard
//! selection whose details are shown beside the chart.

mod details;
mod instruments;
mod ranges;
pub mod state;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    DefaultTerminal, Frame,
};
use std::time::Duration;

use tessitura::{instruments::Rgb, ChartData, InstrumentRange};

pub use state::Selection;

use details::render_details;
use instruments::render_instruments;
use ranges::render_ranges;

/// Width of the instrument list and details column
const SIDE_PANEL_WIDTH: u16 = 36;

/// Terminal color for an instrument
fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// UI application state
pub struct UiApp {
    /// Instrument table, in display order
    table: Vec<InstrumentRange>,
    /// Bars and gridlines to draw
    chart: ChartData,
    /// For each instrument, how many others share part of its range
    overlaps: Vec<usize>,
    /// Selected bar
    selection: Selection,
    /// Whether the caption replaces the chart
    show_caption: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application
    pub fn new(table: Vec<InstrumentRange>, chart: ChartData) -> Self {
        let overlaps = table
            .iter()
            .enumerate()
            .map(|(i, range)| {
                table
                    .iter()
                    .enumerate()
                    .filter(|&(j, other)| j != i && range.overlap(other).is_some())
                    .count()
            })
            .collect();
        let selection = Selection::new(table.len());

        Self {
            table,
            chart,
            overlaps,
            selection,
            show_caption: false,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Nothing animates, so only wake up for input
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.selection.next();
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.selection.prev();
            }
            KeyCode::Home => self.selection.first(),
            KeyCode::End => self.selection.last(),
            KeyCode::Char('?') => {
                self.show_caption = !self.show_caption;
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: page title, body, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Page title
                Constraint::Min(10),   // Chart and side panel
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let header = Paragraph::new(self.chart.config.page_title.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(SIDE_PANEL_WIDTH)])
            .split(chunks[1]);

        if self.show_caption {
            self.render_caption(frame, body[0]);
        } else {
            render_ranges(frame, body[0], &self.chart, self.selection.index());
        }

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(9)])
            .split(body[1]);

        render_instruments(frame, side[0], &self.chart.bars, self.selection.index());

        if let Some(index) = self.selection.index() {
            render_details(
                frame,
                side[1],
                &self.chart.bars[index],
                &self.table[index],
                self.overlaps[index],
            );
        }

        let help = Paragraph::new(" [←/→] Select  [Home/End] First/Last  [?] About  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }

    fn render_caption(&self, frame: &mut Frame, area: Rect) {
        let caption = Paragraph::new(self.chart.config.caption.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Acerca de ").borders(Borders::ALL));
        frame.render_widget(caption, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tessitura::build_table;

    fn app() -> UiApp {
        let table = build_table();
        let chart = ChartData::default();
        UiApp::new(table, chart)
    }

    fn screen(app: &UiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn overlap_counts() {
        let app = app();
        // Piano covers every other range
        assert_eq!(app.overlaps[0], app.table.len() - 1);
        // Double bass (E1-B3) and flute (C4-C7) do not meet
        let bass = &app.table[5];
        let flute = &app.table[6];
        assert!(bass.overlap(flute).is_none());
        assert!(app.overlaps[5] < app.overlaps[0]);
    }

    #[test]
    fn keys_move_selection_and_quit() {
        let mut app = app();
        assert_eq!(app.selection.index(), Some(0));

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.selection.index(), Some(2));

        app.handle_key(KeyCode::Left);
        assert_eq!(app.selection.index(), Some(1));

        app.handle_key(KeyCode::End);
        assert_eq!(app.selection.index(), Some(14));

        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_caption);

        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn renders_selected_details() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        let text = screen(&app);

        assert!(text.contains("Tesitura de Instrumentos y Voces"));
        assert!(text.contains("Tipo: Cuerda frotada"));
        assert!(text.contains("Rango: G3 - G7"));
        assert!(text.contains("Frecuencia: 196 - 3136 Hz"));
    }

    #[test]
    fn renders_caption() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        let text = screen(&app);
        assert!(text.contains("Acerca de"));
    }
}
