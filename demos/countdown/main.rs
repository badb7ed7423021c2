//! Full-screen countdown timer.
//!
//! Type a duration, press enter to load it and `s` to start. Logs go to
//! `countdown.log` (filter with `RUST_LOG`, default `debug`).

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg, Program};
use countdown_widget::prelude::*;
use lipgloss_extras::prelude::*;

struct App {
    countdown: Countdown,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut countdown = countdown_new(&[with_title("COUNTDOWN TIMER")]);
        countdown.engine_mut().on_change(|snap| {
            log::info!("{} {}", snap.phase, snap.clock);
        });
        (Self { countdown }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        Style::new()
            .padding(1, 2, 1, 2)
            .render(&self.countdown.view())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = std::fs::File::create("countdown.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
