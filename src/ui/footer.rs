use crate::domain::ViewId;
use crate::ui::theme::{GREY, SCREEN_BG};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    view: ViewId,
}

impl Footer {
    pub fn new(view: ViewId) -> Self {
        Self { view }
    }

    pub fn hints(&self) -> &'static str {
        match self.view {
            ViewId::Home => {
                " Enter: Subscribe │ Tab: Switch focus │ Ctrl+U: Clear │ Esc: Quit"
            }
            ViewId::Success => " Enter: Dismiss │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let padding = (area.width as usize)
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default()
            .fg(GREY)
            .bg(SCREEN_BG)
            .add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
        .style(text_style)
        .alignment(Alignment::Left)
    }
}
