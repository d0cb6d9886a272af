//! Details panel - the hover text of the selected bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tessitura::{chart::Bar, InstrumentRange};

use super::to_color;

/// Render the hover text plus span and overlap count
pub fn render_details(
    frame: &mut Frame,
    area: Rect,
    bar: &Bar,
    range: &InstrumentRange,
    overlaps: usize,
) {
    let block = Block::default()
        .title(" Detalle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(bar.color)));

    let hover = &bar.hover;
    let lines = vec![
        Line::from(Span::styled(
            hover.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(hover.category.as_str()),
        Line::from(hover.notes.as_str()),
        Line::from(hover.frequencies.as_str()),
        Line::from(Span::styled(
            format!("Extensión: {:.1} semitonos", range.span()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("Se superpone con: {overlaps}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
