use crate::ui::layout::{centered_rect_by_size, LayoutMode};
use crate::ui::success::state::SuccessState;
use crate::ui::theme::{DARK_SLATE, SCREEN_BG, TOMATO, WHITE};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const HEADING: &str = "Thanks for subscribing!";
pub const DISMISS_LABEL: &str = "Dismiss message";

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 20;
const SUCCESS_ICON: [&str; 3] = ["╭───╮", "│ ✔ │", "╰───╯"];

const BODY_PREFIX: &str = "A confirmation email has been sent to ";
const BODY_SUFFIX: &str =
    ". Please open it and click the button inside to confirm your subscription.";

/// Body copy with the address filled in.
pub fn confirmation_text(email: &str) -> String {
    format!("{BODY_PREFIX}{email}{BODY_SUFFIX}")
}

/// Wide terminals get a fitted card; narrow ones use the whole screen with
/// the button pinned to the bottom.
pub fn render_success_message(
    frame: &mut Frame,
    area: Rect,
    state: &SuccessState,
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
        horizontal: 3,
        vertical: 1,
    });

    let [icon, _, heading, _, body, button] = Layout::vertical([
        Constraint::Length(SUCCESS_ICON.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(inner);

    let icon_lines: Vec<Line> = SUCCESS_ICON
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(TOMATO))))
        .collect();
    frame.render_widget(Paragraph::new(icon_lines), icon);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADING,
            Style::default().fg(DARK_SLATE).add_modifier(Modifier::BOLD),
        )),
        heading,
    );

    let text_style = Style::default().fg(DARK_SLATE);
    let body_line = Line::from(vec![
        Span::styled(BODY_PREFIX, text_style),
        Span::styled(
            state.email().to_string(),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(BODY_SUFFIX, text_style),
    ]);
    frame.render_widget(Paragraph::new(body_line).wrap(Wrap { trim: true }), body);

    frame.render_widget(
        Paragraph::new(Span::styled(
            DISMISS_LABEL,
            Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(DARK_SLATE))
                .style(Style::default().bg(DARK_SLATE)),
        ),
        button,
    );
}
