//! Local participant identity and room code.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// A local form value that cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("display name must not be empty")]
    EmptyName,
    #[error("room code must not be empty")]
    EmptyRoomCode,
}

/// Canonical room code: trimmed and uppercased.
///
/// # Errors
///
/// Returns [`FormError::EmptyRoomCode`] when nothing remains after trimming.
pub fn canonical_room_code(code: &str) -> Result<String, FormError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(FormError::EmptyRoomCode);
    }
    Ok(code.to_uppercase())
}

/// One per client process: who we are and which room we are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    room_code: Option<String>,
}

impl Session {
    /// # Errors
    ///
    /// Returns [`FormError::EmptyName`] for a blank display name.
    pub fn new(name: &str) -> Result<Self, FormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(Self { name: name.to_owned(), room_code: None })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn room_code(&self) -> Option<&str> {
        self.room_code.as_deref()
    }

    /// Record the room the server placed us in. A blank code leaves the
    /// session outside any room.
    pub fn enter_room(&mut self, code: &str) {
        match canonical_room_code(code) {
            Ok(code) => {
                tracing::info!(room = %code, "entered room");
                self.room_code = Some(code);
            }
            Err(error) => {
                tracing::warn!(%error, "server announced a blank room code");
                self.room_code = None;
            }
        }
    }

    /// Case-insensitive comparison against the current room.
    #[must_use]
    pub fn matches_room(&self, code: &str) -> bool {
        match (self.room_code.as_deref(), canonical_room_code(code)) {
            (Some(current), Ok(other)) => current == other,
            _ => false,
        }
    }
}
