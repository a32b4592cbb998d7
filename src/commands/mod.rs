//! Command registry.
//!
//! Every user-facing command is one entry in [`COMMANDS`]: a name, a help
//! line, a usage string, and the handler function. Lookup happens on the
//! already lowercased, whitespace-split input.

pub mod handlers;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::CommandResult;

/// State a handler may read or mutate.
pub struct CommandContext<'a> {
    /// The session's address book
    pub book: &'a mut AddressBook,

    /// Runtime settings (search limits)
    pub config: &'a Config,

    /// Usage line of the running command, for missing-argument errors
    pub usage: &'static str,
}

/// Signature shared by every command handler.
pub type Handler = fn(&mut CommandContext<'_>, &[&str]) -> CommandResult<String>;

/// A registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Command word(s) as typed by the user
    pub name: &'static str,

    /// Short description (shown by `help`)
    pub description: &'static str,

    /// Argument synopsis, echoed when arguments are missing
    pub usage: &'static str,

    pub handler: Handler,

    /// Whether the REPL stops after this command runs
    pub exits: bool,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("exits", &self.exits)
            .finish()
    }
}

/// All registered commands, in the order `help` lists them.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        description: "Add a new contact",
        usage: "add <name> <phone>",
        handler: handlers::add_contact,
        exits: false,
    },
    CommandSpec {
        name: "add_phone",
        description: "Add a new phone to an existing contact",
        usage: "add_phone <name> <phone>",
        handler: handlers::add_phone,
        exits: false,
    },
    CommandSpec {
        name: "change",
        description: "Change a contact's phone number",
        usage: "change <name> <old_phone> <new_phone>",
        handler: handlers::change_phone,
        exits: false,
    },
    CommandSpec {
        name: "phone",
        description: "Get the phone numbers for a contact",
        usage: "phone <name>",
        handler: handlers::show_phones,
        exits: false,
    },
    CommandSpec {
        name: "delete",
        description: "Delete a phone from a contact, or the whole contact if no phone is given",
        usage: "delete <name> [phone]",
        handler: handlers::delete,
        exits: false,
    },
    CommandSpec {
        name: "find",
        description: "Look up a contact by exact name",
        usage: "find <name>",
        handler: handlers::find_contact,
        exits: false,
    },
    CommandSpec {
        name: "search",
        description: "Fuzzy search contacts by name or phone digits",
        usage: "search <query>",
        handler: handlers::search,
        exits: false,
    },
    CommandSpec {
        name: "hello",
        description: "Greet the bot",
        usage: "hello",
        handler: handlers::hello,
        exits: false,
    },
    CommandSpec {
        name: "show all",
        description: "Show all contacts",
        usage: "show all",
        handler: handlers::show_all,
        exits: false,
    },
    CommandSpec {
        name: "good bye",
        description: "Exit the bot",
        usage: "good bye",
        handler: handlers::quit,
        exits: true,
    },
    CommandSpec {
        name: "close",
        description: "Exit the bot",
        usage: "close",
        handler: handlers::quit,
        exits: true,
    },
    CommandSpec {
        name: "exit",
        description: "Exit the bot",
        usage: "exit",
        handler: handlers::quit,
        exits: true,
    },
    CommandSpec {
        name: "help",
        description: "Show available commands",
        usage: "help",
        handler: handlers::help,
        exits: false,
    },
];

/// Find a command by its exact name.
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Resolve input tokens to a command and its arguments.
///
/// Single-word commands are tried first; two-word commands such as
/// `show all` are matched against the first two tokens.
pub fn resolve<'t, 'a>(
    tokens: &'t [&'a str],
) -> Option<(&'static CommandSpec, &'t [&'a str])> {
    let first = tokens.first()?;
    if let Some(cmd) = find_command(first) {
        return Some((cmd, &tokens[1..]));
    }

    if tokens.len() >= 2 {
        let two_words = format!("{} {}", tokens[0], tokens[1]);
        if let Some(cmd) = find_command(&two_words) {
            return Some((cmd, &tokens[2..]));
        }
    }

    None
}
