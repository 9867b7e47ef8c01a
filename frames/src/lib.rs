//! Shared envelope model and JSON codec for the game's websocket transport.
//!
//! Every message on the wire is a [`Frame`]: a `type` tag plus a string
//! `content`. Some tags carry a nested JSON document inside `content`
//! (`players`, `choose_word`, `draw`, `fill`), so decoding happens in two
//! steps: [`decode_frame`] parses the envelope, then
//! [`ServerMessage::from_frame`] / [`ClientMessage::from_frame`] turn it into
//! a typed message the caller can match on exhaustively.

use serde::{Deserialize, Serialize};

/// Error returned by the decoders in this crate.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not a JSON `{type, content}` envelope.
    #[error("failed to decode envelope: {0}")]
    Envelope(#[from] serde_json::Error),
    /// A binary frame did not contain UTF-8 text.
    #[error("binary frame is not utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// The `type` tag is not part of the vocabulary for this direction.
    #[error("unknown frame type: {0}")]
    UnknownType(String),
    /// A message could not be serialized.
    #[error("failed to encode {kind}: {source}")]
    Encode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    /// The nested document inside `content` could not be parsed.
    #[error("invalid content for {kind}: {source}")]
    Content {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single envelope on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Tag from the fixed protocol vocabulary, e.g. `"draw"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload; plain text or a nested serialized document depending on `kind`.
    #[serde(default)]
    pub content: String,
}

impl Frame {
    #[must_use]
    pub fn new(kind: &str, content: impl Into<String>) -> Self {
        Self { kind: kind.to_owned(), content: content.into() }
    }

    /// A frame whose tag carries no payload.
    #[must_use]
    pub fn bare(kind: &str) -> Self {
        Self::new(kind, String::new())
    }
}

/// Encode a frame as JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_frame(frame: &Frame) -> Result<String, CodecError> {
    serde_json::to_string(frame).map_err(|source| CodecError::Encode { kind: frame.kind.clone(), source })
}

/// Decode a text frame into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Envelope`] when the text is not a JSON envelope.
pub fn decode_frame(text: &str) -> Result<Frame, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Decode a binary frame: the bytes are read as UTF-8 text, then parsed.
///
/// # Errors
///
/// Returns [`CodecError::Utf8`] for non-text bytes and
/// [`CodecError::Envelope`] for text that is not an envelope.
pub fn decode_binary_frame(bytes: &[u8]) -> Result<Frame, CodecError> {
    decode_frame(std::str::from_utf8(bytes)?)
}

/// A point in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Content of a `draw` frame: one stroke segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawPayload {
    pub from: Point,
    pub to: Point,
    /// CSS hex colour, e.g. `"#ff8000"`.
    pub color: String,
    /// Line width in pixels.
    pub size: f64,
    /// Drawer-local gesture number. Segments of one gesture share it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gesture: Option<u64>,
}

/// Content of a `fill` frame: a flood-fill seed and colour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillPayload {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// Messages this client sends to the game server.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientMessage {
    Nickname(String),
    /// Room type requested by the creator; empty for the server default.
    CreateRoom(String),
    JoinRoom(String),
    StartGame,
    ChooseWord(String),
    /// A chat line; the server treats it as a guess during a turn.
    Message(String),
    Draw(DrawPayload),
    Fill(FillPayload),
    Undo,
    Clear,
}

impl ClientMessage {
    /// The wire tag for this message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nickname(_) => "nickname",
            Self::CreateRoom(_) => "create_room",
            Self::JoinRoom(_) => "join_room",
            Self::StartGame => "start_game",
            Self::ChooseWord(_) => "choose_word",
            Self::Message(_) => "message",
            Self::Draw(_) => "draw",
            Self::Fill(_) => "fill",
            Self::Undo => "undo",
            Self::Clear => "clear",
        }
    }

    /// Build the envelope for this message.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if a nested payload cannot be serialized.
    pub fn to_frame(&self) -> Result<Frame, CodecError> {
        let kind = self.kind();
        let frame = match self {
            Self::Nickname(text)
            | Self::CreateRoom(text)
            | Self::JoinRoom(text)
            | Self::ChooseWord(text)
            | Self::Message(text) => Frame::new(kind, text.as_str()),
            Self::Draw(payload) => Frame::new(kind, nested(kind, payload)?),
            Self::Fill(payload) => Frame::new(kind, nested(kind, payload)?),
            Self::StartGame | Self::Undo | Self::Clear => Frame::bare(kind),
        };
        Ok(frame)
    }

    /// Parse an envelope received from a client.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownType`] for tags outside the outbound
    /// vocabulary and [`CodecError::Content`] for malformed nested content.
    pub fn from_frame(frame: Frame) -> Result<Self, CodecError> {
        let Frame { kind, content } = frame;
        match kind.as_str() {
            "nickname" => Ok(Self::Nickname(content)),
            "create_room" => Ok(Self::CreateRoom(content)),
            "join_room" => Ok(Self::JoinRoom(content)),
            "start_game" => Ok(Self::StartGame),
            "choose_word" => Ok(Self::ChooseWord(content)),
            "message" => Ok(Self::Message(content)),
            "draw" => Ok(Self::Draw(parse_nested(&kind, &content)?)),
            "fill" => Ok(Self::Fill(parse_nested(&kind, &content)?)),
            "undo" => Ok(Self::Undo),
            "clear" => Ok(Self::Clear),
            _ => Err(CodecError::UnknownType(kind)),
        }
    }
}

/// Messages the game server sends to this client.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    RoomCreated(String),
    RoomJoined(String),
    /// Ordered participant labels; always a full replacement.
    Players(Vec<String>),
    /// Display name of the current host.
    Host(String),
    Info(String),
    Chat(String),
    /// Candidate words offered to the next drawer.
    ChooseWord(Vec<String>),
    /// The secret word, sent only to the drawer.
    StartDrawing(String),
    /// The secret word, sent to everyone else. Must be masked locally.
    StartDrawingPublic(String),
    Hint(String),
    /// Structured acknowledgement that the named participant solved the round.
    Guessed(String),
    Draw(DrawPayload),
    Fill(FillPayload),
    Undo,
    Clear,
    RoundEnd(String),
    GameOver(String),
    Error(String),
}

impl ServerMessage {
    /// The wire tag for this message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoomCreated(_) => "room_created",
            Self::RoomJoined(_) => "room_joined",
            Self::Players(_) => "players",
            Self::Host(_) => "host",
            Self::Info(_) => "info",
            Self::Chat(_) => "chat",
            Self::ChooseWord(_) => "choose_word",
            Self::StartDrawing(_) => "start_drawing",
            Self::StartDrawingPublic(_) => "start_drawing_public",
            Self::Hint(_) => "hint",
            Self::Guessed(_) => "guessed",
            Self::Draw(_) => "draw",
            Self::Fill(_) => "fill",
            Self::Undo => "undo",
            Self::Clear => "clear",
            Self::RoundEnd(_) => "round_end",
            Self::GameOver(_) => "game_over",
            Self::Error(_) => "error",
        }
    }

    /// Parse an envelope received from the server.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownType`] for tags outside the inbound
    /// vocabulary and [`CodecError::Content`] for malformed nested content.
    pub fn from_frame(frame: Frame) -> Result<Self, CodecError> {
        let Frame { kind, content } = frame;
        match kind.as_str() {
            "room_created" => Ok(Self::RoomCreated(content)),
            "room_joined" => Ok(Self::RoomJoined(content)),
            "players" => Ok(Self::Players(parse_nested(&kind, &content)?)),
            "host" => Ok(Self::Host(content)),
            "info" => Ok(Self::Info(content)),
            "chat" => Ok(Self::Chat(content)),
            "choose_word" => Ok(Self::ChooseWord(parse_nested(&kind, &content)?)),
            "start_drawing" => Ok(Self::StartDrawing(content)),
            "start_drawing_public" => Ok(Self::StartDrawingPublic(content)),
            "hint" => Ok(Self::Hint(content)),
            "guessed" => Ok(Self::Guessed(content)),
            "draw" => Ok(Self::Draw(parse_nested(&kind, &content)?)),
            "fill" => Ok(Self::Fill(parse_nested(&kind, &content)?)),
            "undo" => Ok(Self::Undo),
            "clear" => Ok(Self::Clear),
            "round_end" => Ok(Self::RoundEnd(content)),
            "game_over" => Ok(Self::GameOver(content)),
            "error" => Ok(Self::Error(content)),
            _ => Err(CodecError::UnknownType(kind)),
        }
    }

    /// Build the envelope for this message, as the server would send it.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if a nested payload cannot be serialized.
    pub fn to_frame(&self) -> Result<Frame, CodecError> {
        let kind = self.kind();
        let frame = match self {
            Self::RoomCreated(text)
            | Self::RoomJoined(text)
            | Self::Host(text)
            | Self::Info(text)
            | Self::Chat(text)
            | Self::StartDrawing(text)
            | Self::StartDrawingPublic(text)
            | Self::Hint(text)
            | Self::Guessed(text)
            | Self::RoundEnd(text)
            | Self::GameOver(text)
            | Self::Error(text) => Frame::new(kind, text.as_str()),
            Self::Players(names) | Self::ChooseWord(names) => Frame::new(kind, nested(kind, names)?),
            Self::Draw(payload) => Frame::new(kind, nested(kind, payload)?),
            Self::Fill(payload) => Frame::new(kind, nested(kind, payload)?),
            Self::Undo | Self::Clear => Frame::bare(kind),
        };
        Ok(frame)
    }
}

/// Decode a text frame straight into a typed server message.
///
/// # Errors
///
/// Any [`CodecError`] from envelope or content parsing.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, CodecError> {
    ServerMessage::from_frame(decode_frame(text)?)
}

fn nested<T: Serialize>(kind: &str, value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|source| CodecError::Encode { kind: kind.to_owned(), source })
}

fn parse_nested<T: for<'de> Deserialize<'de>>(kind: &str, content: &str) -> Result<T, CodecError> {
    serde_json::from_str(content).map_err(|source| CodecError::Content { kind: kind.to_owned(), source })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
