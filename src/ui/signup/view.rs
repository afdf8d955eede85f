use crate::ui::layout::{centered_rect_by_size, split_columns, LayoutMode};
use crate::ui::signup::state::{FormFocus, SignupFormState};
use crate::ui::theme::{
    BUTTON_ACTIVE, DARK_SLATE, ERROR_PLACEHOLDER, ERROR_TINT, GREY, ILLUSTRATION, SCREEN_BG,
    TOMATO, WHITE,
};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const HEADING: &str = "Stay updated!";
pub const DESCRIPTION: &str = "Join 60,000+ product managers receiving monthly updates on:";
pub const PRODUCT_LIST: [&str; 3] = [
    "Product discovery and building what matters",
    "Measuring to ensure updates are successful",
    "And much more!",
];
pub const EMAIL_LABEL: &str = "Email address";
pub const SUBSCRIBE_LABEL: &str = "Subscribe to monthly newsletter";

const CARD_WIDTH: u16 = 110;
const CARD_HEIGHT: u16 = 24;
const FORM_COLUMN_PERCENT: u16 = 55;
const LIST_ICON: &str = "✔ ";

const ILLUSTRATION_ART: [&str; 11] = [
    "    ╭──────────────────────────╮    ",
    "    │  ▂▃▅▇  ▇▅▃▂   ╭────────╮  │    ",
    "    │  ▇▇▇▇  ▇▇▇▇   │ ●  ●  ●│  │    ",
    "    │               ╰────────╯  │    ",
    "    │   ╭───────╮  ╭─────────╮  │    ",
    "    │   │ ▁▃▅▇█ │  │  ◔  ◑   │  │    ",
    "    │   ╰───────╯  ╰─────────╯  │    ",
    "    │   ▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔    │    ",
    "    ╰──────────────┬───────────╯    ",
    "                ╭──┴──╮             ",
    "                ╰─────╯             ",
];
const BANNER_ROWS: usize = 4;

/// Draws the sign-up card. Wide terminals get the illustration beside the
/// form; narrow ones get a short banner above it.
pub fn render_signup_form(
    frame: &mut Frame,
    area: Rect,
    state: &SignupFormState,
    mode: LayoutMode,
) {
    frame.render_widget(Block::default().style(Style::default().bg(SCREEN_BG)), area);

    let card = match mode {
        LayoutMode::Wide => centered_rect_by_size(CARD_WIDTH, CARD_HEIGHT, area),
        LayoutMode::Narrow => area,
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(WHITE))
            .style(Style::default().bg(WHITE).fg(DARK_SLATE)),
        card,
    );
    let inner = card.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    match mode {
        LayoutMode::Wide => {
            let (form, art) = split_columns(inner, FORM_COLUMN_PERCENT);
            render_form(frame, form, state);
            render_illustration(frame, art, &ILLUSTRATION_ART);
        }
        LayoutMode::Narrow => {
            let [banner, form] =
                Layout::vertical([Constraint::Length(BANNER_ROWS as u16), Constraint::Min(0)])
                    .areas(inner);
            render_illustration(frame, banner, &ILLUSTRATION_ART[..BANNER_ROWS]);
            render_form(frame, form, state);
        }
    }
}

fn render_form(frame: &mut Frame, area: Rect, state: &SignupFormState) {
    let [heading, _, description, _, list, _, label_row, input, _, button, _] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(PRODUCT_LIST.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADING,
            Style::default().fg(DARK_SLATE).add_modifier(Modifier::BOLD),
        )),
        heading,
    );
    frame.render_widget(
        Paragraph::new(DESCRIPTION)
            .style(Style::default().fg(DARK_SLATE))
            .wrap(Wrap { trim: true }),
        description,
    );

    let items: Vec<Line> = PRODUCT_LIST
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(LIST_ICON, Style::default().fg(TOMATO)),
                Span::styled(*item, Style::default().fg(DARK_SLATE)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(items), list);

    render_label_row(frame, label_row, state);
    render_input(frame, input, state);
    render_button(frame, button, state.focus == FormFocus::SubscribeButton);
}

fn render_label_row(frame: &mut Frame, area: Rect, state: &SignupFormState) {
    let [label, message] =
        Layout::horizontal([Constraint::Length(EMAIL_LABEL.len() as u16), Constraint::Min(0)])
            .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            EMAIL_LABEL,
            Style::default().fg(DARK_SLATE).add_modifier(Modifier::BOLD),
        )),
        label,
    );
    if let Some(error) = state.error_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error,
                Style::default().fg(TOMATO).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            message,
        );
    }
}

fn render_input(frame: &mut Frame, area: Rect, state: &SignupFormState) {
    let (border, background, text, placeholder) = if state.is_errored() {
        (TOMATO, ERROR_TINT, TOMATO, ERROR_PLACEHOLDER)
    } else if state.focus == FormFocus::Input {
        (DARK_SLATE, WHITE, DARK_SLATE, GREY)
    } else {
        (GREY, WHITE, DARK_SLATE, GREY)
    };
    let text_style = if state.email.is_empty() {
        Style::default().fg(placeholder)
    } else {
        Style::default().fg(text)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background));
    let inner = block.inner(area);

    // One column is kept free for the cursor.
    let room = inner.width.saturating_sub(1) as usize;
    let shown = visible_tail(state.display_text(), room);
    frame.render_widget(
        Paragraph::new(Span::styled(shown.to_string(), text_style)).block(block),
        area,
    );

    if state.focus == FormFocus::Input && inner.width > 0 && inner.height > 0 {
        let typed = if state.email.is_empty() {
            0
        } else {
            shown.chars().count() as u16
        };
        frame.set_cursor_position((inner.x + typed.min(inner.width - 1), inner.y));
    }
}

fn render_button(frame: &mut Frame, area: Rect, focused: bool) {
    let background = if focused { BUTTON_ACTIVE } else { DARK_SLATE };
    frame.render_widget(
        Paragraph::new(Span::styled(
            SUBSCRIBE_LABEL,
            Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(background))
                .style(Style::default().bg(background)),
        ),
        area,
    );
}

fn render_illustration(frame: &mut Frame, area: Rect, art: &[&'static str]) {
    let lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(ILLUSTRATION))))
        .collect();
    let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let [_, art_area] =
        Layout::vertical([Constraint::Length(top_pad), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), art_area);
}

/// Last `width` characters of `text`, so the end of a long address stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let start = text
        .char_indices()
        .nth(count - width)
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::visible_tail;

    #[test]
    fn short_text_is_shown_whole() {
        assert_eq!(visible_tail("a@b.co", 10), "a@b.co");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("someone@example.com", 7), "ple.com");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
