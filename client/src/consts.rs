//! Game-level constants.

/// Length of the local countdown shown for each drawing turn, in ticks.
pub const TURN_SECONDS: u32 = 60;

/// Text the server puts after a player's name when they solve the round.
pub const SOLVED_MARKER: &str = "a trouvé le mot";

/// Prefix of the server's solve announcement.
pub const SOLVED_PREFIX: &str = "🏆";

/// Placeholder shown for each character of a hidden word.
pub const MASK_GLYPH: char = '_';
