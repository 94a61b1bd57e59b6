use crate::components::Button;
use sprig::prelude::*;

/// Landing page: a heading, the click count and the button that raises it.
///
/// The count belongs to this instance; a new `Home` starts again at zero.
#[derive(Debug)]
pub struct Home {
    clicks: Signal<u64>,
}

impl Home {
    pub fn new() -> Self {
        Self {
            clicks: signal!(0),
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks.get_untracked()
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Home {
    fn render(&self) -> Html {
        let clicks = self.clicks.clone();
        let increment = action!(clicks => {
            clicks.update(|c| c.saturating_add(1));
        });

        div()
            .child(h1().text("Hello"))
            .child(p().text(format!("Clicks: {}", self.clicks.get())))
            .child(Button::new(increment).render())
            .into()
    }
}
