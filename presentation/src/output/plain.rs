//! Plain-text renderer (no spinner, no color)

use chatline_application::SessionObserver;

/// Prints replies and the fallback as plain lines; used with `--quiet`
pub struct PlainRenderer;

impl SessionObserver for PlainRenderer {
    fn on_user_message(&self, _text: &str) {}

    fn on_assistant_message(&self, text: &str) {
        println!("{}", text);
    }

    fn on_pending(&self) {}

    fn on_pending_cleared(&self) {}

    fn on_error(&self, fallback: &str) {
        println!("{}", fallback);
    }
}
