//! Command handlers.
//!
//! Each handler checks its argument count, builds every value object it
//! needs, and only then touches the address book. A rejected command
//! therefore never leaves a partial change behind.

use super::{CommandContext, COMMANDS};
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::info;

/// Return the arguments if there are at least `count` of them.
fn require<'t, 'a>(
    ctx: &CommandContext<'_>,
    args: &'t [&'a str],
    count: usize,
) -> CommandResult<&'t [&'a str]> {
    if args.len() < count {
        return Err(CommandError::MissingArguments { usage: ctx.usage });
    }
    Ok(args)
}

/// `add <name> <phone>`
pub fn add_contact(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 2)?;
    let name = ContactName::new(args[0])?;
    let phone = PhoneNumber::new(args[1])?;

    let message = format!("A new contact added successfully. {} phone: {}", name, phone);
    info!(name = %name, phone = %phone, "Contact added");
    ctx.book.add_record(Record::with_phone(name, phone));
    Ok(message)
}

/// `add_phone <name> <phone>`
pub fn add_phone(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 2)?;
    let name = ContactName::new(args[0])?;
    let phone = PhoneNumber::new(args[1])?;

    let record = ctx.book.get_mut(name.as_str())?;
    let message = format!(
        "A new phone: {}, has been added to contact name: {}.",
        phone, name
    );
    info!(name = %name, phone = %phone, "Phone added");
    record.add_phone(phone);
    Ok(message)
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_phone(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 3)?;
    let name = ContactName::new(args[0])?;
    let old = PhoneNumber::new(args[1])?;
    let new = PhoneNumber::new(args[2])?;

    let message = format!(
        "A contact name: {} number: {}, has been changed to {}.",
        name, old, new
    );
    ctx.book
        .get_mut(name.as_str())?
        .edit_phone(old.as_str(), new)?;
    info!(name = %name, old = %old, "Phone changed");
    Ok(message)
}

/// `phone <name>`
pub fn show_phones(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 1)?;
    ctx.book
        .find(args[0])
        .map(|record| record.to_string())
        .ok_or_else(|| CommandError::ContactNotFound(args[0].to_string()))
}

/// `delete <name> [phone]`
///
/// With a phone, removes that one number. Without, removes the contact.
pub fn delete(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 1)?;
    let name = ContactName::new(args[0])?;
    let phone = args.get(1).map(|p| PhoneNumber::new(*p)).transpose()?;

    match phone {
        Some(phone) => {
            ctx.book
                .get_mut(name.as_str())?
                .remove_phone(phone.as_str())?;
            info!(name = %name, phone = %phone, "Phone deleted");
            Ok(format!(
                "Contact name: {} phone: {}, has been deleted.",
                name, phone
            ))
        }
        None => {
            ctx.book.delete(name.as_str())?;
            info!(name = %name, "Contact deleted");
            Ok(format!("Contact {} has been deleted.", name))
        }
    }
}

/// `find <name>`
pub fn find_contact(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 1)?;
    Ok(match ctx.book.find(args[0]) {
        Some(record) => record.to_string(),
        None => format!("No contact named '{}'.", args[0]),
    })
}

/// `search <query>`
pub fn search(ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult<String> {
    let args = require(ctx, args, 1)?;
    let query = args.join(" ");
    let matches = ctx.book.search(
        &query,
        ctx.config.max_search_results,
        ctx.config.search_confidence_threshold,
    );

    if matches.is_empty() {
        return Ok(format!("No contacts match '{}'.", query));
    }

    let mut lines = vec![format!("Search results for '{}':", query)];
    lines.extend(
        matches
            .iter()
            .map(|m| format!("{} ({}%)", m.record, m.confidence)),
    );
    Ok(lines.join("\n"))
}

/// `show all`
pub fn show_all(ctx: &mut CommandContext<'_>, _args: &[&str]) -> CommandResult<String> {
    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(ctx.book.records().map(|record| record.to_string()));
    Ok(lines.join("\n"))
}

/// `hello`
pub fn hello(_ctx: &mut CommandContext<'_>, _args: &[&str]) -> CommandResult<String> {
    Ok("Hello! How can I help you?".to_string())
}

/// `help`
pub fn help(_ctx: &mut CommandContext<'_>, _args: &[&str]) -> CommandResult<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|cmd| format!("{}: {}", cmd.name, cmd.description)),
    );
    Ok(lines.join("\n"))
}

/// `good bye`, `close`, `exit`
pub fn quit(_ctx: &mut CommandContext<'_>, _args: &[&str]) -> CommandResult<String> {
    Ok("Thank you for using our BOT!!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::AddressBook;
    use crate::commands::find_command;
    use crate::config::Config;
    use crate::domain::ValidationError;

    struct Fixture {
        book: AddressBook,
        config: Config,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                book: AddressBook::new(),
                config: Config::default(),
            }
        }

        fn run(&mut self, command: &str, args: &[&str]) -> CommandResult<String> {
            let spec = find_command(command).expect("registered command");
            let mut ctx = CommandContext {
                book: &mut self.book,
                config: &self.config,
                usage: spec.usage,
            };
            (spec.handler)(&mut ctx, args)
        }

        fn phones(&self, name: &str) -> Vec<String> {
            self.book
                .find(name)
                .map(|r| r.phones().iter().map(|p| p.to_string()).collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_add_contact() {
        let mut fx = Fixture::new();
        let out = fx.run("add", &["john", "1234567890"]).unwrap();
        assert_eq!(out, "A new contact added successfully. john phone: 1234567890");
        assert_eq!(fx.phones("john"), vec!["1234567890"]);
    }

    #[test]
    fn test_add_contact_rejects_numeric_name_before_phone() {
        let mut fx = Fixture::new();
        let err = fx.run("add", &["12345", "bad"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidValue(ValidationError::NumericName("12345".to_string()))
        );
        assert!(fx.book.is_empty());
    }

    #[test]
    fn test_add_contact_rejects_bad_phone() {
        let mut fx = Fixture::new();
        let err = fx.run("add", &["john", "12345"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidValue(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert!(fx.book.is_empty());
    }

    #[test]
    fn test_add_contact_missing_arguments() {
        let mut fx = Fixture::new();
        assert!(matches!(
            fx.run("add", &["john"]),
            Err(CommandError::MissingArguments { .. })
        ));
        assert!(matches!(
            fx.run("add", &[]),
            Err(CommandError::MissingArguments { .. })
        ));
    }

    #[test]
    fn test_add_contact_overwrites() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        fx.run("add_phone", &["john", "2222222222"]).unwrap();
        fx.run("add", &["john", "3333333333"]).unwrap();
        assert_eq!(fx.phones("john"), vec!["3333333333"]);
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        let out = fx.run("add_phone", &["john", "2222222222"]).unwrap();
        assert_eq!(
            out,
            "A new phone: 2222222222, has been added to contact name: john."
        );
        assert_eq!(fx.phones("john"), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_add_phone_unknown_contact_leaves_book_untouched() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        let err = fx.run("add_phone", &["jane", "2222222222"]).unwrap_err();
        assert_eq!(err, CommandError::ContactNotFound("jane".to_string()));
        assert_eq!(fx.book.len(), 1);
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid_phone() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        assert!(matches!(
            fx.run("add_phone", &["john", "22"]),
            Err(CommandError::InvalidValue(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_change_phone() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        fx.run("add_phone", &["john", "2222222222"]).unwrap();

        let out = fx
            .run("change", &["john", "1111111111", "9999999999"])
            .unwrap();
        assert_eq!(
            out,
            "A contact name: john number: 1111111111, has been changed to 9999999999."
        );
        assert_eq!(fx.phones("john"), vec!["9999999999", "2222222222"]);
    }

    #[test]
    fn test_change_phone_same_value() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        fx.run("change", &["john", "1111111111", "1111111111"])
            .unwrap();
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_change_phone_errors() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();

        assert_eq!(
            fx.run("change", &["jane", "1111111111", "2222222222"])
                .unwrap_err(),
            CommandError::ContactNotFound("jane".to_string())
        );
        assert_eq!(
            fx.run("change", &["john", "3333333333", "2222222222"])
                .unwrap_err(),
            CommandError::PhoneNotFound {
                name: "john".to_string(),
                phone: "3333333333".to_string(),
            }
        );
        assert!(matches!(
            fx.run("change", &["john", "1111111111", "abc"]),
            Err(CommandError::InvalidValue(ValidationError::InvalidPhone(_)))
        ));
        assert!(matches!(
            fx.run("change", &["john", "1111111111"]),
            Err(CommandError::MissingArguments { .. })
        ));
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_show_phones() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1234567890"]).unwrap();
        fx.run("add_phone", &["john", "0987654321"]).unwrap();

        assert_eq!(
            fx.run("phone", &["john"]).unwrap(),
            "Name: john, Phones: 1234567890, 0987654321"
        );
        assert_eq!(
            fx.run("phone", &["jane"]).unwrap_err(),
            CommandError::ContactNotFound("jane".to_string())
        );
    }

    #[test]
    fn test_delete_phone() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();
        fx.run("add_phone", &["john", "2222222222"]).unwrap();

        let out = fx.run("delete", &["john", "1111111111"]).unwrap();
        assert_eq!(out, "Contact name: john phone: 1111111111, has been deleted.");
        assert_eq!(fx.phones("john"), vec!["2222222222"]);
    }

    #[test]
    fn test_delete_missing_phone_leaves_record() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();

        assert!(matches!(
            fx.run("delete", &["john", "9999999999"]),
            Err(CommandError::PhoneNotFound { .. })
        ));
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_delete_rejects_malformed_phone() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();

        assert_eq!(
            fx.run("delete", &["john", "abc"]).unwrap_err(),
            CommandError::InvalidValue(ValidationError::InvalidPhone("abc".to_string()))
        );
        assert_eq!(fx.phones("john"), vec!["1111111111"]);
    }

    #[test]
    fn test_delete_rejects_numeric_name() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("delete", &["12345"]).unwrap_err(),
            CommandError::InvalidValue(ValidationError::NumericName("12345".to_string()))
        );
    }

    #[test]
    fn test_missing_arguments_echo_registered_usage() {
        let mut fx = Fixture::new();
        for cmd in COMMANDS {
            if let Err(CommandError::MissingArguments { usage }) = fx.run(cmd.name, &[]) {
                assert_eq!(usage, cmd.usage);
            }
        }
        assert_eq!(
            fx.run("change", &["john"]).unwrap_err(),
            CommandError::MissingArguments {
                usage: "change <name> <old_phone> <new_phone>",
            }
        );
    }

    #[test]
    fn test_delete_whole_contact() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1111111111"]).unwrap();

        assert_eq!(
            fx.run("delete", &["john"]).unwrap(),
            "Contact john has been deleted."
        );
        assert!(fx.book.is_empty());
        assert_eq!(
            fx.run("delete", &["john"]).unwrap_err(),
            CommandError::ContactNotFound("john".to_string())
        );
    }

    #[test]
    fn test_find_contact() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1234567890"]).unwrap();

        assert_eq!(
            fx.run("find", &["john"]).unwrap(),
            "Name: john, Phones: 1234567890"
        );
        assert_eq!(
            fx.run("find", &["jane"]).unwrap(),
            "No contact named 'jane'."
        );
    }

    #[test]
    fn test_search() {
        let mut fx = Fixture::new();
        fx.run("add", &["john", "1234567890"]).unwrap();
        fx.run("add", &["mary", "0987654321"]).unwrap();

        let out = fx.run("search", &["jon"]).unwrap();
        assert!(out.starts_with("Search results for 'jon':"));
        assert!(out.contains("Name: john"));
        assert!(!out.contains("mary"));

        assert_eq!(
            fx.run("search", &["zzzzzz"]).unwrap(),
            "No contacts match 'zzzzzz'."
        );
    }

    #[test]
    fn test_show_all() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("show all", &[]).unwrap(), "All contacts:");

        fx.run("add", &["mary", "0987654321"]).unwrap();
        fx.run("add", &["john", "1234567890"]).unwrap();
        assert_eq!(
            fx.run("show all", &[]).unwrap(),
            "All contacts:\nName: john, Phones: 1234567890\nName: mary, Phones: 0987654321"
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut fx = Fixture::new();
        let out = fx.run("help", &[]).unwrap();
        assert!(out.starts_with("Available commands:"));
        for cmd in COMMANDS {
            assert!(out.contains(&format!("{}: {}", cmd.name, cmd.description)));
        }
    }

    #[test]
    fn test_greetings() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("hello", &[]).unwrap(), "Hello! How can I help you?");
        assert_eq!(fx.run("exit", &[]).unwrap(), "Thank you for using our BOT!!");
    }
}
