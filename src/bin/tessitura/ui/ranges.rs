//! Range chart widget - floating bars over dashed octave lines

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

use tessitura::chart::{Bar, ChartData};

use super::to_color;

/// Horizontal room per bar, in canvas units
const SLOT: f64 = 1.0;
const BAR_WIDTH: f64 = 0.6;
/// Room right of the bars for the octave labels
const LABEL_ROOM: f64 = 1.6;
/// Length of one dash (and of the gap after it)
const DASH: f64 = 0.2;
/// Bars darker than this get an outline so they stay visible
const DARK_LUMA: f32 = 0.15;

/// Render the bars, octave lines and their labels
pub fn render_ranges(frame: &mut Frame, area: Rect, chart: &ChartData, selected: Option<usize>) {
    let config = &chart.config;
    let block = Block::default()
        .title(format!(" {} ", config.title))
        .title_bottom(Line::from(format!(" {} ", config.y_axis_title)))
        .borders(Borders::ALL);

    let inner = block.inner(area);
    if inner.width < 8 || inner.height < 4 {
        frame.render_widget(block, area);
        return;
    }

    let plot_width = chart.bars.len() as f64 * SLOT;
    let x_max = plot_width + LABEL_ROOM;
    let [y_low, y_high] = chart.y_bounds();
    // A braille dot is half a cell wide
    let fill_step = x_max / (inner.width as f64 * 2.0);
    let grid_color = named_color(&config.gridline.color);
    let grid_style = Style::default().fg(grid_color);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, x_max])
        .y_bounds([y_low, y_high])
        .paint(|ctx| {
            for marker in &chart.gridlines {
                draw_gridline(ctx, plot_width, marker.position, config.gridline.dashed, grid_color);
            }
            ctx.layer();

            for (i, bar) in chart.bars.iter().enumerate() {
                let left = i as f64 * SLOT + (SLOT - BAR_WIDTH) / 2.0;
                fill_bar(ctx, left, bar, fill_step);
            }

            if let Some((i, bar)) = selected.and_then(|i| chart.bars.get(i).map(|bar| (i, bar))) {
                let margin = (SLOT - BAR_WIDTH) / 4.0;
                ctx.draw(&Rectangle {
                    x: i as f64 * SLOT + margin,
                    y: bar.base,
                    width: SLOT - 2.0 * margin,
                    height: bar.height,
                    color: Color::White,
                });
            }

            for marker in &chart.gridlines {
                ctx.print(
                    plot_width + 0.1,
                    marker.position,
                    Span::styled(marker.label.clone(), grid_style),
                );
            }

            if config.show_y_tick_labels {
                for bar in &chart.bars {
                    ctx.print(0.0, bar.base, Span::styled(format!("{:.0}", bar.base), grid_style));
                }
            }

            // Bar numbers along the bottom, matching the instrument list
            for i in 0..chart.bars.len() {
                let style = if Some(i) == selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ctx.print(i as f64 * SLOT + 0.2, y_low, Span::styled((i + 1).to_string(), style));
            }
        });

    frame.render_widget(canvas, area);
}

/// Horizontal guide line from the left edge to `x_end`
fn draw_gridline(ctx: &mut Context<'_>, x_end: f64, y: f64, dashed: bool, color: Color) {
    if !dashed {
        ctx.draw(&CanvasLine::new(0.0, y, x_end, y, color));
        return;
    }

    let mut x = 0.0;
    while x < x_end {
        ctx.draw(&CanvasLine::new(x, y, (x + DASH).min(x_end), y, color));
        x += 2.0 * DASH;
    }
}

/// Solid bar from `base` to `top`, drawn as vertical strokes
fn fill_bar(ctx: &mut Context<'_>, left: f64, bar: &Bar, step: f64) {
    let color = to_color(bar.color);
    let mut x = left;
    while x <= left + BAR_WIDTH {
        ctx.draw(&CanvasLine::new(x, bar.base, x, bar.top(), color));
        x += step;
    }

    if bar.color.luma() < DARK_LUMA {
        ctx.draw(&Rectangle {
            x: left,
            y: bar.base,
            width: BAR_WIDTH,
            height: bar.height,
            color: Color::DarkGray,
        });
    }
}

/// Map a named color from the chart settings onto the terminal palette
fn named_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "lightgrey" | "lightgray" => Color::Gray,
        other => other.parse().unwrap_or(Color::DarkGray),
    }
}
