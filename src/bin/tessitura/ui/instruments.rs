//! Instrument list - numbered names with color swatches

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use tessitura::chart::Bar;

use super::to_color;

/// Render the list of bars, highlighting the selected one
pub fn render_instruments(frame: &mut Frame, area: Rect, bars: &[Bar], selected: Option<usize>) {
    let items: Vec<ListItem> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled("■ ", Style::default().fg(to_color(bar.color))),
                Span::raw(bar.label.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Instrumentos ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶");

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
