use crate::ui::app::{ActiveView, App};
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::signup::view::render_signup_form;
use crate::ui::success::view::render_success_message;
use ratatui::Frame;

/// Draws one frame. Reads `app`, never changes it.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);
    let mode = app.layout_mode(area.width);

    match app.view() {
        ActiveView::Home(form) => render_signup_form(frame, body, form, mode),
        ActiveView::Success(success) => render_success_message(frame, body, success, mode),
    }

    let footer_widget = Footer::new(app.view().id());
    frame.render_widget(footer_widget.widget(footer), footer);
}
