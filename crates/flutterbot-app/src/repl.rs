//! Terminal front end: reads lines, runs turns, renders session events.

use std::sync::Arc;

use chrono::Local;
use flutterbot_ai::{SessionError, SessionHandle, TurnOutcome};
use flutterbot_common::{Event, EventBus, FlutterbotError, Message, Origin};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// One message as printed in the terminal, continuation lines indented.
pub fn format_message(msg: &Message, bot_name: &str) -> String {
    let time = msg.timestamp().with_timezone(&Local).format("%H:%M");
    let who = match msg.origin() {
        Origin::User => "You",
        Origin::Bot => bot_name,
    };

    let mut lines = msg.text().lines();
    let mut out = format!("[{time}] {who}: {}", lines.next().unwrap_or(""));
    for line in lines {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// Text to print for an event. The user's own lines are already on screen.
pub fn render_event(event: &Event, bot_name: &str) -> Option<String> {
    match event {
        Event::MessageAppended(msg) if msg.origin() == Origin::Bot => {
            Some(format_message(msg, bot_name))
        }
        Event::TypingChanged(true) => Some(format!("{bot_name} is typing…")),
        _ => None,
    }
}

/// Interactive loop. Each line is one turn; the next line is not submitted
/// until the previous turn has finished. Ends on EOF or `/quit`.
pub async fn run<R>(
    handle: SessionHandle,
    bus: Arc<EventBus>,
    bot_name: &str,
    input: R,
) -> Result<(), FlutterbotError>
where
    R: AsyncBufRead + Unpin,
{
    for msg in handle.settled().await.history() {
        println!("{}", format_message(msg, bot_name));
    }

    let mut rx = bus.subscribe();
    let name = bot_name.to_string();
    let renderer = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Ok(event) => {
                    if let Some(text) = render_event(&event, &name) {
                        println!("{text}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Renderer fell behind"),
            }
        }
    });

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line) {
            break;
        }
        match handle.submit(line) {
            Ok(task) => {
                task.await
                    .map_err(|e| FlutterbotError::Ai(format!("turn task failed: {e}")))?;
            }
            Err(SessionError::EmptyInput) => continue,
            Err(e) => warn!("{e}"),
        }
    }

    bus.publish(Event::Shutdown);
    renderer
        .await
        .map_err(|e| FlutterbotError::Other(format!("renderer task failed: {e}")))?;
    Ok(())
}

/// Run a single turn and return the bot's reply text.
pub async fn once(
    handle: &SessionHandle,
    message: &str,
) -> Result<(String, TurnOutcome), FlutterbotError> {
    let task = handle
        .submit(message)
        .map_err(|e| FlutterbotError::Other(e.to_string()))?;
    let outcome = task
        .await
        .map_err(|e| FlutterbotError::Ai(format!("turn task failed: {e}")))?;

    let state = handle.settled().await;
    let reply = state
        .last()
        .map(|msg| msg.text().to_string())
        .unwrap_or_default();
    Ok((reply, outcome))
}
