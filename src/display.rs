//! Text rendering of notices for the terminal.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use client::game::Notice;

/// Countdown values worth a line: every ten seconds and the last five.
fn countdown_is_shown(remaining: u32) -> bool {
    remaining % 10 == 0 || remaining <= 5
}

/// One line for a notice, or `None` when there is nothing to show.
#[must_use]
pub fn describe(notice: &Notice) -> Option<String> {
    match notice {
        Notice::RoomEntered { code, host: true } => Some(format!("room {code} (you are host)")),
        Notice::RoomEntered { code, host: false } => Some(format!("room {code}")),
        Notice::Players(names) => Some(format!("players: {}", names.join(", "))),
        Notice::Gates { may_start: true, .. } => Some("ready: type /start to begin".to_owned()),
        Notice::WordOffer(words) => Some(format!("choose a word with /choose: {}", words.join(" | "))),
        Notice::Word(word) => Some(format!("word: {word}")),
        Notice::DrawingPermission(true) => Some("your turn to draw".to_owned()),
        Notice::DrawingPermission(false) => Some("drawing closed".to_owned()),
        Notice::Countdown(remaining) if countdown_is_shown(*remaining) => Some(format!("{remaining}s left")),
        Notice::Solved => Some("you found the word!".to_owned()),
        Notice::Log(line) => Some(line.clone()),
        Notice::GameOver(result) => Some(format!("game over: {result}")),
        Notice::Error(text) => Some(format!("error: {text}")),
        Notice::Gates { .. }
        | Notice::Countdown(_)
        | Notice::CountdownHalted
        | Notice::SurfaceReset
        | Notice::Redraw => None,
    }
}

pub fn print_notices(notices: &[Notice]) {
    for line in notices.iter().filter_map(describe) {
        println!("{line}");
    }
}
