use crate::render::RenderState;
use crate::ui::screen::ScreenView;

/// Screen-side view of the application.
///
/// Holds the last [`RenderState`] received from the store plus what only the
/// screen cares about (spinner frame, quit flag). Never touches the network.
pub struct App {
    state: RenderState,
    animation_tick: u8,
    should_quit: bool,
    endpoint: String,
    show_version: bool,
}

impl App {
    pub fn new(endpoint: impl Into<String>, show_version: bool) -> Self {
        Self {
            state: RenderState::Idle,
            animation_tick: 0,
            should_quit: false,
            endpoint: endpoint.into(),
            show_version,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn show_version(&self) -> bool {
        self.show_version
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_state(&mut self, state: RenderState) {
        if state.is_loading() && !self.state.is_loading() {
            self.animation_tick = 0;
        }
        self.state = state;
    }

    pub fn on_tick(&mut self) {
        if self.state.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn screen_view(&self) -> ScreenView<'_> {
        ScreenView::from_state(&self.state, self.animation_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_blank() {
        let app = App::new("http://localhost/product", true);
        assert_eq!(app.state(), &RenderState::Idle);
        assert_eq!(app.screen_view(), ScreenView::Blank);
        assert!(!app.should_quit());
    }

    #[test]
    fn tick_only_animates_while_loading() {
        let mut app = App::new("http://localhost/product", true);
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);

        app.on_state(RenderState::Loading);
        app.on_tick();
        app.on_tick();
        assert_eq!(app.animation_tick(), 2);

        app.on_state(RenderState::Success {
            payload: "Shoes".into(),
        });
        app.on_tick();
        assert_eq!(app.animation_tick(), 2);
        assert_eq!(app.screen_view(), ScreenView::Text("Shoes"));
    }

    #[test]
    fn new_loading_restarts_spinner() {
        let mut app = App::new("http://localhost/product", true);
        app.on_state(RenderState::Loading);
        app.on_tick();
        app.on_state(RenderState::Success {
            payload: "Shoes".into(),
        });
        app.on_state(RenderState::Loading);
        assert_eq!(app.animation_tick(), 0);
    }
}
