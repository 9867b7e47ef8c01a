//! Application context.
//!
//! [`Controller`] owns one of each component and is the only place they
//! meet. Inbound messages go through [`Controller::handle`]; user intents go
//! through the intent methods, which return an [`Outcome`] whose `outbound`
//! messages the host forwards to the channel in order. Components only ever
//! see the slice they need: the input adapter gets the drawing permission as
//! a `bool`, the game machine gets the local name as a `&str`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use canvas::color::{ColorError, Rgba};
use canvas::engine::{CanvasEngine, Fill, Op, Stroke};
use canvas::geom::Point;
use canvas::input::{InputAdapter, Tool};
use frames::{ClientMessage, DrawPayload, FillPayload, ServerMessage};

use crate::game::{GameMachine, Notice};
use crate::session::{FormError, Session, canonical_room_code};

/// What an intent produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Messages to send, in order. Empty when the intent was suppressed.
    pub outbound: Vec<ClientMessage>,
    pub notices: Vec<Notice>,
}

impl Outcome {
    fn send(message: ClientMessage) -> Self {
        Self { outbound: vec![message], notices: Vec::new() }
    }

    /// Operations already applied to the local surface.
    fn drawn(ops: &[Op]) -> Self {
        if ops.is_empty() {
            return Self::default();
        }
        Self { outbound: ops.iter().map(op_message).collect(), notices: vec![Notice::Redraw] }
    }
}

/// Outbound form of a locally applied operation.
#[must_use]
pub fn op_message(op: &Op) -> ClientMessage {
    match op {
        Op::Stroke(stroke) => ClientMessage::Draw(DrawPayload {
            from: frames::Point::new(stroke.from.x, stroke.from.y),
            to: frames::Point::new(stroke.to.x, stroke.to.y),
            color: stroke.color.to_hex(),
            size: stroke.width,
            gesture: stroke.gesture,
        }),
        Op::Fill(fill) => {
            ClientMessage::Fill(FillPayload { x: fill.seed.x, y: fill.seed.y, color: fill.color.to_hex() })
        }
        Op::Undo => ClientMessage::Undo,
        Op::Clear => ClientMessage::Clear,
    }
}

/// Operation carried by an inbound `draw`.
///
/// # Errors
///
/// Returns [`ColorError`] when the colour is not hex.
pub fn draw_op(payload: &DrawPayload) -> Result<Op, ColorError> {
    Ok(Op::Stroke(Stroke {
        from: Point::new(payload.from.x, payload.from.y),
        to: Point::new(payload.to.x, payload.to.y),
        color: Rgba::parse_hex(&payload.color)?,
        width: payload.size,
        gesture: payload.gesture,
    }))
}

/// Operation carried by an inbound `fill`.
///
/// # Errors
///
/// Returns [`ColorError`] when the colour is not hex.
pub fn fill_op(payload: &FillPayload) -> Result<Op, ColorError> {
    Ok(Op::Fill(Fill { seed: Point::new(payload.x, payload.y), color: Rgba::parse_hex(&payload.color)? }))
}

pub struct Controller {
    session: Session,
    game: GameMachine,
    canvas: CanvasEngine,
    input: InputAdapter,
}

impl Controller {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session, game: GameMachine::new(), canvas: CanvasEngine::new(), input: InputAdapter::new() }
    }

    // --- Queries ---

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn game(&self) -> &GameMachine {
        &self.game
    }

    #[must_use]
    pub fn canvas(&self) -> &CanvasEngine {
        &self.canvas
    }

    #[must_use]
    pub fn input(&self) -> &InputAdapter {
        &self.input
    }

    // --- Lobby ---

    /// Messages that open a new room, sent once the channel is ready.
    #[must_use]
    pub fn create_room(&self, room_type: &str) -> Vec<ClientMessage> {
        vec![
            ClientMessage::Nickname(self.session.name().to_owned()),
            ClientMessage::CreateRoom(room_type.trim().to_owned()),
        ]
    }

    /// Messages that join an existing room, sent once the channel is ready.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyRoomCode`] for a blank code; nothing is sent.
    pub fn join_room(&self, code: &str) -> Result<Vec<ClientMessage>, FormError> {
        let code = canonical_room_code(code)?;
        Ok(vec![ClientMessage::Nickname(self.session.name().to_owned()), ClientMessage::JoinRoom(code)])
    }

    #[must_use]
    pub fn start_game(&self) -> Outcome {
        if !self.game.may_start_game(self.session.name()) {
            tracing::debug!("start suppressed: not host or not enough players");
            return Outcome::default();
        }
        Outcome::send(ClientMessage::StartGame)
    }

    pub fn choose_word(&mut self, word: &str) -> Outcome {
        match self.game.choose_word(word) {
            Some(chosen) => Outcome::send(ClientMessage::ChooseWord(chosen)),
            None => {
                tracing::debug!(word, "word choice suppressed");
                Outcome::default()
            }
        }
    }

    /// Send a chat line, which the server treats as a guess during a turn.
    pub fn submit_guess(&mut self, text: &str) -> Outcome {
        let text = text.trim();
        if text.is_empty() {
            return Outcome::default();
        }
        if !self.game.can_guess() {
            tracing::debug!("guess suppressed: drawing or already solved");
            return Outcome::default();
        }
        Outcome::send(ClientMessage::Message(text.to_owned()))
    }

    // --- Drawing ---

    pub fn pointer_down(&mut self, pt: Point) -> Outcome {
        let ops = self.input.on_pointer_down(self.game.can_draw(), &mut self.canvas, pt);
        Outcome::drawn(&ops)
    }

    pub fn pointer_move(&mut self, pt: Point) -> Outcome {
        let ops = self.input.on_pointer_move(self.game.can_draw(), &mut self.canvas, pt);
        Outcome::drawn(&ops)
    }

    pub fn pointer_up(&mut self) -> Outcome {
        let ops = self.input.on_pointer_up(&mut self.canvas);
        Outcome::drawn(&ops)
    }

    pub fn pointer_leave(&mut self) -> Outcome {
        let ops = self.input.on_pointer_leave(&mut self.canvas);
        Outcome::drawn(&ops)
    }

    pub fn click(&mut self, pt: Point) -> Outcome {
        let ops = self.input.on_click(self.game.can_draw(), &mut self.canvas, pt);
        Outcome::drawn(&ops)
    }

    pub fn undo(&mut self) -> Outcome {
        let ops = self.input.undo(self.game.can_draw(), &mut self.canvas);
        Outcome::drawn(&ops)
    }

    pub fn clear(&mut self) -> Outcome {
        let ops = self.input.clear(self.game.can_draw(), &mut self.canvas);
        Outcome::drawn(&ops)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.input.set_tool(tool);
    }

    /// # Errors
    ///
    /// Returns [`ColorError`] and keeps the current colour for bad hex.
    pub fn set_color(&mut self, hex: &str) -> Result<(), ColorError> {
        self.input.set_color(hex)
    }

    pub fn set_size(&mut self, size: f64) {
        self.input.set_size(size);
    }

    // --- Events ---

    /// One tick of the display countdown.
    pub fn tick(&mut self) -> Vec<Notice> {
        self.game.tick()
    }

    /// Apply one inbound message.
    pub fn handle(&mut self, message: &ServerMessage) -> Vec<Notice> {
        match message {
            ServerMessage::Draw(payload) => self.apply_remote(draw_op(payload)),
            ServerMessage::Fill(payload) => self.apply_remote(fill_op(payload)),
            ServerMessage::Undo => self.apply_remote(Ok(Op::Undo)),
            ServerMessage::Clear => self.apply_remote(Ok(Op::Clear)),
            ServerMessage::RoomCreated(code) | ServerMessage::RoomJoined(code) => {
                self.session.enter_room(code);
                self.dispatch(message)
            }
            ServerMessage::Players(_)
            | ServerMessage::Host(_)
            | ServerMessage::Info(_)
            | ServerMessage::Chat(_)
            | ServerMessage::ChooseWord(_)
            | ServerMessage::StartDrawing(_)
            | ServerMessage::StartDrawingPublic(_)
            | ServerMessage::Hint(_)
            | ServerMessage::Guessed(_)
            | ServerMessage::RoundEnd(_)
            | ServerMessage::GameOver(_)
            | ServerMessage::Error(_) => self.dispatch(message),
        }
    }

    fn dispatch(&mut self, message: &ServerMessage) -> Vec<Notice> {
        let notices = self.game.handle(self.session.name(), message);
        for notice in &notices {
            match notice {
                Notice::SurfaceReset => {
                    self.input.cancel(&mut self.canvas);
                    self.canvas.reset();
                }
                Notice::DrawingPermission(false) => self.input.cancel(&mut self.canvas),
                _ => {}
            }
        }
        notices
    }

    fn apply_remote(&mut self, op: Result<Op, ColorError>) -> Vec<Notice> {
        match op {
            Ok(op) => {
                self.canvas.apply_remote(&op);
                vec![Notice::Redraw]
            }
            Err(error) => {
                tracing::warn!(%error, "rejected remote operation");
                Vec::new()
            }
        }
    }
}
