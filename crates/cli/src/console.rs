use async_trait::async_trait;
use nu_ansi_term::Color;
use snipscope_api::StatusPresenter;

/// Prints status changes to the terminal. Silent in JSON mode, where the
/// command prints its own machine-readable output.
pub struct ConsolePresenter {
    json: bool,
}

impl ConsolePresenter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

#[async_trait]
impl StatusPresenter for ConsolePresenter {
    async fn hide(&self) {
        if !self.json {
            println!(
                "{}",
                Color::DarkGray.paint("Not a snippet or section; nothing to report")
            );
        }
    }

    async fn show_warning(&self, text: &str) {
        if !self.json {
            println!("{}", Color::Yellow.bold().paint(text));
        }
    }

    async fn show_active(&self, text: &str) {
        if !self.json {
            println!("{}", Color::Green.bold().paint(text));
        }
    }

    async fn show_message(&self, text: &str) {
        if !self.json {
            println!("{}", text);
        }
    }
}
