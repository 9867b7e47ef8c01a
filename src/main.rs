//! Terminal client for the drawing-and-guessing game.
//!
//! Connects to the game server, creates or joins a room, then runs one
//! event loop over three sources: inbound server messages, stdin commands,
//! and a one-second countdown tick.

mod command;
mod display;

use std::time::Duration;

use clap::{Parser, Subcommand};
use client::channel::{self, ChannelError, ChannelSender};
use client::controller::{Controller, Outcome};
use client::session::{FormError, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::Command;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "guesswhat", about = "Terminal client for the drawing and guessing game")]
struct Cli {
    #[arg(long, env = "GUESSWHAT_URL", default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Display name, unique within the room.
    #[arg(long, env = "GUESSWHAT_NAME")]
    name: String,

    #[command(subcommand)]
    room: RoomCommand,
}

#[derive(Subcommand, Debug)]
enum RoomCommand {
    /// Create a room and become its host.
    Create {
        /// Room type forwarded to the server; empty for its default.
        #[arg(long, default_value = "")]
        room_type: String,
    },
    /// Join a room by code (any case).
    Join { code: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut controller = Controller::new(Session::new(&cli.name)?);
    let opening = match &cli.room {
        RoomCommand::Create { room_type } => controller.create_room(room_type),
        RoomCommand::Join { code } => controller.join_room(code)?,
    };

    let (sender, mut receiver) = channel::connect(&cli.url, |tx| {
        for message in opening {
            if let Err(error) = tx.send(message) {
                tracing::warn!(%error, "failed to queue opening message");
            }
        }
    })
    .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            inbound = receiver.recv() => {
                let Some(message) = inbound else {
                    println!("disconnected");
                    break;
                };
                display::print_notices(&controller.handle(&message));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => forward(&sender, run(&mut controller, command))?,
                    Ok(None) => {}
                    Err(error) => println!("{error}"),
                }
            }
            _ = ticker.tick() => display::print_notices(&controller.tick()),
        }
    }

    tracing::info!("session ended");
    Ok(())
}

fn run(controller: &mut Controller, command: Command) -> Outcome {
    match command {
        Command::Guess(text) => controller.submit_guess(&text),
        Command::Start => controller.start_game(),
        Command::Choose(word) => controller.choose_word(&word),
        Command::Down(pt) => controller.pointer_down(pt),
        Command::Move(pt) => controller.pointer_move(pt),
        Command::Up => controller.pointer_up(),
        Command::Leave => controller.pointer_leave(),
        Command::Click(pt) => controller.click(pt),
        Command::Undo => controller.undo(),
        Command::Clear => controller.clear(),
        Command::Tool(tool) => {
            controller.set_tool(tool);
            Outcome::default()
        }
        Command::Color(hex) => {
            if let Err(error) = controller.set_color(&hex) {
                println!("{error}");
            }
            Outcome::default()
        }
        Command::Size(size) => {
            controller.set_size(size);
            Outcome::default()
        }
        Command::Quit => Outcome::default(),
    }
}

/// Queue an outcome's messages in order, then show its notices.
fn forward(sender: &ChannelSender, outcome: Outcome) -> Result<(), ChannelError> {
    for message in outcome.outbound {
        sender.send(message)?;
    }
    display::print_notices(&outcome.notices);
    Ok(())
}
