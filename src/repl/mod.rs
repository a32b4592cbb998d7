//! Read-eval-print loop.
//!
//! Reads one line at a time, hands it to [`ContactBot`], and writes the
//! reply. Generic over the reader and writer so the whole session can be
//! driven from memory in tests.

mod dispatcher;

pub use dispatcher::{ContactBot, Control, Reply};

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Line that ends the session without running a command.
pub const TERMINATOR: &str = ".";

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to BOT >>>";

/// Run the REPL until `.`, a quit command, or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned. Command errors
/// are printed and the loop continues.
pub fn run<R, W>(bot: &mut ContactBot, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", bot.config().prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            break;
        }

        if line.trim() == TERMINATOR {
            debug!("Terminator received");
            break;
        }

        let reply = bot.handle_line(&line);
        if !reply.output.is_empty() {
            writeln!(output, "{}", reply.output)?;
        }
        if reply.control == Control::Exit {
            break;
        }
    }

    info!(contacts = bot.book().len(), "Session finished");
    output.flush()
}
