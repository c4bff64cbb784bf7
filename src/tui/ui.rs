use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use scrollsense::scroll::Direction;

use crate::app::{App, Viewport};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: title, content, status, history, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status
        Constraint::Length(6), // Scroll-ended history
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_status(frame, main_layout[2], app);
    render_history(frame, main_layout[3], app);
    render_hotkeys(frame, main_layout[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let padding = (area.width.saturating_sub(11)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("scroll", Style::new().fg(TITLE_CORAL).bold()),
        Span::styled("s", Style::new().fg(TITLE_GOLD).bold()),
        Span::styled("en", Style::new().fg(TITLE_LIGHT_BLUE).bold()),
        Span::styled("se", Style::new().fg(TITLE_MINT).bold()),
    ]);

    frame.render_widget(Paragraph::new(centered), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(
            format!(" content · {} ", app.axes()),
            Style::new().fg(TEXT_WHITE),
        ));
    let inner = block.inner(area);

    // Layout is only known here, so the viewport is recorded on every draw
    app.viewport = Viewport {
        width: inner.width,
        height: inner.height,
    };

    let offset = app.scroll.offset();
    let lines: Vec<Line> = app
        .scroll
        .content()
        .lines
        .iter()
        .map(|l| Line::styled(l.as_str(), Style::new().fg(TEXT_WHITE)))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((offset.y.round() as u16, offset.x.round() as u16));
    frame.render_widget(paragraph, area);

    let options = *app.scroll.options();
    if !options.shows_indicators {
        return;
    }

    let max = app.max_offset();
    if options.axes.vertical() {
        let mut state = ScrollbarState::new(max.y as usize).position(offset.y as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin { vertical: 1, horizontal: 0 }),
            &mut state,
        );
    }
    if options.axes.horizontal() {
        let mut state = ScrollbarState::new(max.x as usize).position(offset.x as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::HorizontalBottom),
            area.inner(Margin { vertical: 0, horizontal: 1 }),
            &mut state,
        );
    }
}

fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Unknown => "·",
        Direction::Left => "←",
        Direction::Right => "→",
        Direction::Up => "↑",
        Direction::Down => "↓",
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let direction = app.scroll.direction();
    let scrolling = app.scroll.is_scrolling();
    let (activity, activity_color) = if scrolling {
        ("scrolling", TITLE_GOLD)
    } else {
        ("settled", SETTLED_GREEN)
    };

    let mut spans = vec![
        Span::styled(" offset ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.scroll.offset().to_string(), Style::new().fg(TEXT_WHITE).bold()),
        Span::styled("  direction ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            format!("{} {}", direction_arrow(direction), direction),
            Style::new().fg(TITLE_LIGHT_BLUE).bold(),
        ),
        Span::styled("  changes ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.direction_changes.get().to_string(), Style::new().fg(TEXT_WHITE)),
        Span::raw("  "),
        Span::styled(activity, Style::new().fg(activity_color)),
    ];
    if let Some(ended) = app.last_scroll_end().filter(|_| !scrolling) {
        spans.push(Span::styled(format!(" at {}", ended.offset), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.history.borrow();

    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::styled(
            "Scroll, then pause to see scroll-ended events",
            Style::new().fg(TEXT_DIM),
        )]
    } else {
        history
            .iter()
            .rev()
            .enumerate()
            .map(|(i, ended)| {
                let offset_style = if i == 0 {
                    Style::new().fg(SETTLED_GREEN).bold()
                } else {
                    Style::new().fg(SETTLED_GREEN)
                };
                Line::from(vec![
                    Span::styled("ended at ", Style::new().fg(TEXT_DIM)),
                    Span::styled(ended.offset.to_string(), offset_style),
                    Span::styled(" heading ", Style::new().fg(TEXT_DIM)),
                    Span::styled(
                        format!("{} {}", direction_arrow(ended.direction), ended.direction),
                        Style::new().fg(TEXT_WHITE),
                    ),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(" scroll ended ", Style::new().fg(TEXT_DIM)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" rows • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[h/l]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" columns • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[PgUp/PgDn]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" page • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[g/G]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" top/bottom • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled("uit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(hotkeys), area);
}
