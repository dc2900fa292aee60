//! Product screen body: one visual per [`RenderState`].

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::render::RenderState;
use crate::ui::layout::vertical_center;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_TEXT: &str = "Loading product...";

/// What the body shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenView<'a> {
    Blank,
    Spinner { frame: &'static str },
    Text(&'a str),
    Error(&'a str),
}

impl<'a> ScreenView<'a> {
    pub fn from_state(state: &'a RenderState, animation_tick: u8) -> Self {
        match state {
            RenderState::Idle => ScreenView::Blank,
            RenderState::Loading => ScreenView::Spinner {
                frame: SPINNER_FRAMES[animation_tick as usize % SPINNER_FRAMES.len()],
            },
            RenderState::Success { payload } => ScreenView::Text(payload),
            RenderState::Failure { error } => ScreenView::Error(error.message()),
        }
    }

    fn lines(self) -> Vec<Line<'a>> {
        match self {
            ScreenView::Blank => Vec::new(),
            ScreenView::Spinner { frame } => vec![Line::from(vec![
                Span::styled(format!("{} ", frame), Style::default().fg(STATUS_OK)),
                Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
            ])],
            ScreenView::Text(text) => text
                .lines()
                .map(|line| Line::styled(line, Style::default().fg(HEADER_TEXT)))
                .collect(),
            ScreenView::Error(message) => message
                .lines()
                .map(|line| {
                    Line::styled(
                        line,
                        Style::default()
                            .fg(STATUS_ERROR)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect(),
        }
    }
}

/// Widget drawing a [`ScreenView`] centered in its area.
pub struct ProductScreen<'a> {
    view: ScreenView<'a>,
}

impl<'a> ProductScreen<'a> {
    pub fn new(view: ScreenView<'a>) -> Self {
        Self { view }
    }
}

impl Widget for ProductScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.view.lines();
        if lines.is_empty() || area.is_empty() {
            return;
        }
        // Rows needed once long lines wrap at the area width.
        let width = usize::from(area.width);
        let rows: usize = lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(width))
            .sum();
        let height = u16::try_from(rows).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(vertical_center(area, height), buf);
    }
}
