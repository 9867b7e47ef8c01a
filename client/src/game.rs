//! Game state machine.
//!
//! [`GameMachine`] turns inbound protocol messages into phase transitions and
//! [`Notice`]s for the host to render. It owns the turn state and is its only
//! writer; everything else reads the gates it exposes (`can_draw`,
//! `can_guess`, `may_start_game`).
//!
//! Local identity is passed in per call rather than stored, so the host flag
//! is always derived from the latest announcement and the current name.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use std::time::{Duration, Instant};

use frames::ServerMessage;

use crate::consts::{MASK_GLYPH, SOLVED_MARKER, SOLVED_PREFIX, TURN_SECONDS};
use crate::countdown::Countdown;
use crate::session::canonical_room_code;

/// Where the current turn stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// Between turns, waiting for the server.
    Idle,
    /// The local participant must pick one of these words.
    ChoosingWord { candidates: Vec<String> },
    /// Someone is drawing `word`.
    Drawing {
        word: String,
        is_local_drawer: bool,
        /// Local display deadline; the server decides when the turn really ends.
        deadline: Instant,
    },
    /// The turn is over and the word has been revealed.
    RoundEnding { revealed_word: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Home,
    RoomConfig,
    Playing(TurnState),
    GameOver { result: String },
}

/// A UI transition for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RoomEntered { code: String, host: bool },
    /// Full replacement of the participant list.
    Players(Vec<String>),
    /// Host flag and start gate, recomputed.
    Gates { host: bool, may_start: bool },
    WordOffer(Vec<String>),
    /// The word as it should be displayed now: full, masked, or hinted.
    Word(String),
    /// Local drawing permission opened or closed.
    DrawingPermission(bool),
    /// A new turn starts on a blank surface.
    SurfaceReset,
    /// The surface changed and should be repainted.
    Redraw,
    Countdown(u32),
    CountdownHalted,
    /// The local participant solved the round.
    Solved,
    Log(String),
    GameOver(String),
    Error(String),
}

/// Placeholder form of a word: one glyph per character, space separated.
#[must_use]
pub fn mask_word(word: &str) -> String {
    let glyph = MASK_GLYPH.to_string();
    word.chars().map(|_| glyph.as_str()).collect::<Vec<_>>().join(" ")
}

/// Whether `line` is the server's announcement that `name` solved the round:
/// `"🏆 <name> a trouvé le mot ! (+N)"`, the trophy being optional. The name
/// must open the announcement, so neither `"Ana Maria"` nor a player's own
/// `"Bob: Ana a trouvé le mot"` counts for `"Maria"` or `"Ana"`.
#[must_use]
pub fn announces_solver(line: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let line = line.trim_start();
    let body = line.strip_prefix(SOLVED_PREFIX).unwrap_or(line).trim_start();
    body.strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(' '))
        .is_some_and(|rest| rest.starts_with(SOLVED_MARKER))
}

#[derive(Debug, Clone)]
pub struct GameMachine {
    phase: Phase,
    players: Vec<String>,
    announced_host: Option<String>,
    has_guessed: bool,
    displayed_word: String,
    log: Vec<String>,
    countdown: Countdown,
}

impl Default for GameMachine {
    fn default() -> Self {
        Self {
            phase: Phase::Home,
            players: Vec::new(),
            announced_host: None,
            has_guessed: false,
            displayed_word: String::new(),
            log: Vec::new(),
            countdown: Countdown::new(),
        }
    }
}

impl GameMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn turn(&self) -> Option<&TurnState> {
        match &self.phase {
            Phase::Playing(turn) => Some(turn),
            _ => None,
        }
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn is_host(&self, local_name: &str) -> bool {
        self.announced_host.as_deref() == Some(local_name)
    }

    #[must_use]
    pub fn may_start_game(&self, local_name: &str) -> bool {
        self.is_host(local_name) && self.players.len() >= 2
    }

    /// True while the local participant is the drawer of a running turn.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        matches!(self.turn(), Some(TurnState::Drawing { is_local_drawer: true, .. }))
    }

    #[must_use]
    pub fn has_guessed(&self) -> bool {
        self.has_guessed
    }

    /// Guesses are sent only by a participant who is not drawing and has not
    /// already solved the round.
    #[must_use]
    pub fn can_guess(&self) -> bool {
        !self.can_draw() && !self.has_guessed
    }

    #[must_use]
    pub fn displayed_word(&self) -> &str {
        &self.displayed_word
    }

    /// Every chat and info line received, plus round summaries.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    // --- Transitions ---

    /// Apply one inbound message. Canvas operations are not the machine's
    /// concern and yield nothing.
    pub fn handle(&mut self, local_name: &str, message: &ServerMessage) -> Vec<Notice> {
        match message {
            ServerMessage::RoomCreated(code) => self.enter_room(local_name, code, Some(local_name.to_owned())),
            ServerMessage::RoomJoined(code) => self.enter_room(local_name, code, None),
            ServerMessage::Players(names) => {
                self.players.clone_from(names);
                vec![Notice::Players(names.clone()), self.gates(local_name)]
            }
            ServerMessage::Host(name) => {
                self.announced_host = Some(name.clone());
                vec![self.gates(local_name)]
            }
            ServerMessage::Info(line) | ServerMessage::Chat(line) => self.record_line(local_name, line),
            ServerMessage::ChooseWord(candidates) => {
                let mut notices = self.set_phase(Phase::Playing(TurnState::ChoosingWord {
                    candidates: candidates.clone(),
                }));
                notices.push(Notice::WordOffer(candidates.clone()));
                notices
            }
            ServerMessage::StartDrawing(word) => self.begin_drawing(word, true),
            ServerMessage::StartDrawingPublic(word) => self.begin_drawing(word, false),
            ServerMessage::Hint(hint) => self.apply_hint(hint),
            ServerMessage::Guessed(name) => {
                if name == local_name {
                    self.mark_solved()
                } else {
                    Vec::new()
                }
            }
            ServerMessage::RoundEnd(word) => self.end_round(word),
            ServerMessage::GameOver(result) => self.end_game(result),
            ServerMessage::Error(text) => {
                tracing::info!(error = %text, "server rejected a request");
                vec![Notice::Error(text.clone())]
            }
            ServerMessage::Draw(_) | ServerMessage::Fill(_) | ServerMessage::Undo | ServerMessage::Clear => Vec::new(),
        }
    }

    /// Pick one of the offered words. Returns the word to echo to the server,
    /// or `None` when no offer is open or `word` is not among the candidates.
    pub fn choose_word(&mut self, word: &str) -> Option<String> {
        let Phase::Playing(TurnState::ChoosingWord { candidates }) = &self.phase else {
            return None;
        };
        let chosen = candidates.iter().find(|candidate| candidate.as_str() == word.trim())?.clone();
        self.phase = Phase::Playing(TurnState::Idle);
        Some(chosen)
    }

    /// Advance the display countdown by one tick.
    pub fn tick(&mut self) -> Vec<Notice> {
        self.countdown.tick().map(Notice::Countdown).into_iter().collect()
    }

    fn gates(&self, local_name: &str) -> Notice {
        Notice::Gates { host: self.is_host(local_name), may_start: self.may_start_game(local_name) }
    }

    /// Replace the phase, reporting a change in drawing permission.
    fn set_phase(&mut self, phase: Phase) -> Vec<Notice> {
        let could_draw = self.can_draw();
        self.phase = phase;
        let can_draw = self.can_draw();
        if could_draw == can_draw { Vec::new() } else { vec![Notice::DrawingPermission(can_draw)] }
    }

    fn enter_room(&mut self, local_name: &str, code: &str, host: Option<String>) -> Vec<Notice> {
        let code = canonical_room_code(code).unwrap_or_default();
        self.players.clear();
        self.announced_host = host;
        self.has_guessed = false;
        self.displayed_word.clear();
        self.countdown.halt();
        let mut notices = self.set_phase(Phase::RoomConfig);
        notices.push(Notice::RoomEntered { code, host: self.is_host(local_name) });
        notices.push(self.gates(local_name));
        notices
    }

    fn begin_drawing(&mut self, word: &str, is_local_drawer: bool) -> Vec<Notice> {
        let deadline = Instant::now() + Duration::from_secs(u64::from(TURN_SECONDS));
        self.has_guessed = false;
        self.displayed_word = if is_local_drawer { word.to_owned() } else { mask_word(word) };
        self.countdown.start(TURN_SECONDS);
        tracing::info!(drawer = is_local_drawer, "drawing phase started");

        let mut notices = vec![Notice::SurfaceReset];
        notices.extend(self.set_phase(Phase::Playing(TurnState::Drawing {
            word: word.to_owned(),
            is_local_drawer,
            deadline,
        })));
        notices.push(Notice::Word(self.displayed_word.clone()));
        notices.push(Notice::Countdown(TURN_SECONDS));
        notices
    }

    fn apply_hint(&mut self, hint: &str) -> Vec<Notice> {
        let guessing = matches!(self.turn(), Some(TurnState::Drawing { is_local_drawer: false, .. }));
        if !guessing || self.has_guessed {
            tracing::debug!("hint ignored");
            return Vec::new();
        }
        self.displayed_word = hint.to_owned();
        vec![Notice::Word(self.displayed_word.clone())]
    }

    fn record_line(&mut self, local_name: &str, line: &str) -> Vec<Notice> {
        self.log.push(line.to_owned());
        let mut notices = vec![Notice::Log(line.to_owned())];
        if announces_solver(line, local_name) {
            notices.extend(self.mark_solved());
        }
        notices
    }

    fn mark_solved(&mut self) -> Vec<Notice> {
        let Some(TurnState::Drawing { word, is_local_drawer: false, .. }) = self.turn() else {
            return Vec::new();
        };
        if self.has_guessed {
            return Vec::new();
        }
        let word = word.clone();
        self.has_guessed = true;
        self.displayed_word.clone_from(&word);
        self.countdown.halt();
        tracing::info!("round solved");
        vec![Notice::Solved, Notice::Word(word), Notice::CountdownHalted]
    }

    fn end_round(&mut self, word: &str) -> Vec<Notice> {
        self.countdown.halt();
        self.displayed_word = word.to_owned();
        let line = format!("Round over: the word was {word}");
        self.log.push(line.clone());

        let mut notices = self.set_phase(Phase::Playing(TurnState::RoundEnding { revealed_word: word.to_owned() }));
        notices.extend([Notice::Word(word.to_owned()), Notice::CountdownHalted, Notice::Log(line)]);
        notices
    }

    fn end_game(&mut self, result: &str) -> Vec<Notice> {
        self.countdown.halt();
        self.log.push(result.to_owned());
        tracing::info!("game over");

        let mut notices = self.set_phase(Phase::GameOver { result: result.to_owned() });
        notices.extend([Notice::CountdownHalted, Notice::Log(result.to_owned()), Notice::GameOver(result.to_owned())]);
        notices
    }
}
