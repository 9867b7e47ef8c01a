//! Client core for the drawing-and-guessing game.
//!
//! Everything between the websocket and the screen lives here except the
//! pixels, which belong to the `canvas` crate. A host (the terminal front end,
//! or anything else with an event loop) owns one [`controller::Controller`],
//! feeds it inbound messages and user intents, and forwards what it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Application context: owns session, game machine, canvas, input; dispatches every message |
//! | [`game`] | Game state machine: phases, turn state, host and guess gates, event log |
//! | [`session`] | Display name and canonical room code |
//! | [`countdown`] | Decorative turn countdown |
//! | [`channel`] | Websocket transport with an ordered writer task |
//! | [`consts`] | Turn length and protocol text markers |

pub mod channel;
pub mod consts;
pub mod controller;
pub mod countdown;
pub mod game;
pub mod session;
