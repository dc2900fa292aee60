use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::ProductScreen;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.endpoint()).widget(app.state()), header);
    frame.render_widget(ProductScreen::new(app.screen_view()), body);
    frame.render_widget(Footer::new(app.show_version()).widget(footer), footer);
}
