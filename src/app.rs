//! Demo application state: a text pane driven by a [`ScrollView`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scrollsense::log;
use scrollsense::scroll::{
    Axes, Offset, ScrollEnded, ScrollProxy, ScrollTarget, ScrollView, ScrollViewOptions,
};

use crate::events::Action;

/// Rows or columns the content may be pulled past its far edge when bouncing.
const OVERSCROLL_LIMIT: f64 = 4.0;

/// Number of scroll-ended events kept for the history panel.
const HISTORY_LEN: usize = 5;

/// Content of the demo scroll view.
#[derive(Debug)]
pub struct DemoContent {
    pub lines: Vec<String>,
    /// Handle for programmatic scrolling, captured when the content is built
    pub proxy: ScrollProxy,
}

impl DemoContent {
    pub fn generate(count: usize, proxy: &ScrollProxy) -> Self {
        let lines = (1..=count)
            .map(|n| {
                // Vary line width so horizontal scrolling has something to show
                let filler = "·".repeat((n * 7) % 120);
                format!("{:>5}  line {} {}", n, n, filler)
            })
            .collect();
        Self {
            lines,
            proxy: proxy.clone(),
        }
    }

    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}

/// Visible size of the content pane, set during render.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

pub struct App {
    pub scroll: ScrollView<DemoContent>,
    pub viewport: Viewport,
    /// Settled scrolls, newest last
    pub history: Rc<RefCell<Vec<ScrollEnded>>>,
    /// How many times the reported direction changed
    pub direction_changes: Rc<Cell<usize>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: ScrollViewOptions, lines: usize) -> Self {
        let mut scroll = ScrollView::new(options, |proxy| DemoContent::generate(lines, proxy));

        let history = Rc::new(RefCell::new(Vec::new()));
        let sink = history.clone();
        scroll.on_scroll_ended(move |offset, direction| {
            let mut history = sink.borrow_mut();
            history.push(ScrollEnded { offset, direction });
            if history.len() > HISTORY_LEN {
                history.remove(0);
            }
        });

        let direction_changes = Rc::new(Cell::new(0));
        let counter = direction_changes.clone();
        scroll.subscribe_direction(move |direction| {
            counter.set(counter.get() + 1);
            log::log_event(&format!("direction -> {}", direction));
        });

        Self {
            scroll,
            viewport: Viewport::default(),
            history,
            direction_changes,
            should_quit: false,
        }
    }

    pub fn axes(&self) -> Axes {
        self.scroll.options().axes
    }

    /// Largest in-bounds offset for the current viewport.
    pub fn max_offset(&self) -> Offset {
        let content = self.scroll.content();
        let max_x = content.width().saturating_sub(self.viewport.width as usize);
        let max_y = content.lines.len().saturating_sub(self.viewport.height as usize);
        Offset::new(max_x as f64, max_y as f64)
    }

    fn overscroll(&self) -> f64 {
        if self.scroll.options().bounces { OVERSCROLL_LIMIT } else { 0.0 }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollBy { dx, dy } => self.scroll_by(dx, dy),
            Action::ScrollTo(target) => {
                if !self.scroll.content().proxy.scroll_to(target) {
                    log::log(&format!("Dropped scroll request {:?}: scroll view is gone", target));
                }
            }
            Action::None => {}
        }
    }

    /// Scroll by a delta, honouring disabled axes and the bounce allowance.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let axes = self.axes();
        let dx = if axes.horizontal() { dx } else { 0 };
        let dy = if axes.vertical() { dy } else { 0 };
        if dx == 0 && dy == 0 {
            return;
        }

        let current = self.scroll.offset();
        let max = self.max_offset();
        let over = self.overscroll();
        let next = Offset::new(
            (current.x + dx as f64).clamp(0.0, max.x + over),
            (current.y + dy as f64).clamp(0.0, max.y + over),
        );
        self.move_to(next);
    }

    fn move_to(&mut self, offset: Offset) {
        if offset != self.scroll.offset() {
            self.scroll.handle_offset(offset);
        }
    }

    /// Resolve programmatic scroll requests against the current layout.
    pub fn apply_scroll_requests(&mut self) {
        for target in self.scroll.take_scroll_requests() {
            let current = self.scroll.offset();
            let max = self.max_offset();
            let next = match target {
                ScrollTarget::Top => Offset::new(current.x, 0.0),
                ScrollTarget::Bottom => Offset::new(current.x, max.y),
                ScrollTarget::Offset(o) => Offset::new(o.x.clamp(0.0, max.x), o.y.clamp(0.0, max.y)),
                ScrollTarget::Line(line) => Offset::new(current.x, (line as f64).min(max.y)),
            };
            log::log_event(&format!("scroll to {:?} -> {}", target, next));
            self.move_to(self.axes().mask(next));
        }
    }

    /// Spring overscrolled content back towards its edge.
    pub fn tick(&mut self) {
        let current = self.scroll.offset();
        let max = self.max_offset();
        if current.x <= max.x && current.y <= max.y {
            return;
        }

        let settle = |value: f64, limit: f64| {
            if value > limit {
                // Halve the distance each tick, finishing on whole rows
                (limit + ((value - limit) / 2.0).floor()).max(limit)
            } else {
                value
            }
        };
        self.move_to(Offset::new(settle(current.x, max.x), settle(current.y, max.y)));
    }

    pub fn record_scroll_end(&mut self, ended: ScrollEnded) {
        log::log_event(&format!(
            "scroll ended at {} ({}), {} direction changes so far",
            ended.offset,
            ended.direction,
            self.direction_changes.get()
        ));
    }

    pub fn last_scroll_end(&self) -> Option<ScrollEnded> {
        self.history.borrow().last().copied()
    }
}
