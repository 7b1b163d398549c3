//! Telegram command table and parsing.
//!
//! [`COMMANDS`] is the single source for parsing, help text and the
//! Telegram "/" menu.

use std::fmt::Write as _;

/// One entry of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name without the leading slash.
    pub name: &'static str,
    /// Required positional arguments, in order.
    pub args: &'static [&'static str],
    /// One-line description for help and the bot menu.
    pub description: &'static str,
}

impl CommandSpec {
    /// Usage line, e.g. `/add <name> <host:port>`.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut usage = format!("/{}", self.name);
        for arg in self.args {
            let _ = write!(usage, " <{arg}>");
        }
        usage
    }
}

/// Every command the bot understands.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "start",
        args: &[],
        description: "Welcome message",
    },
    CommandSpec {
        name: "help",
        args: &[],
        description: "Show all commands",
    },
    CommandSpec {
        name: "add",
        args: &["name", "host:port"],
        description: "Register a server",
    },
    CommandSpec {
        name: "list",
        args: &[],
        description: "List registered servers",
    },
    CommandSpec {
        name: "status",
        args: &["name"],
        description: "Check whether a server is reachable",
    },
    CommandSpec {
        name: "statusall",
        args: &[],
        description: "Check every server",
    },
    CommandSpec {
        name: "startserver",
        args: &["name"],
        description: "Start a server",
    },
    CommandSpec {
        name: "stopserver",
        args: &["name"],
        description: "Stop a server",
    },
    CommandSpec {
        name: "startall",
        args: &[],
        description: "Start every server",
    },
    CommandSpec {
        name: "stopall",
        args: &[],
        description: "Stop every server",
    },
    CommandSpec {
        name: "is_running",
        args: &["name"],
        description: "Ask whether a server's process is running",
    },
    CommandSpec {
        name: "delete",
        args: &["name"],
        description: "Remove a server",
    },
    CommandSpec {
        name: "log",
        args: &["name"],
        description: "Show a server's recent log",
    },
];

/// Look up a command by name (no leading slash).
#[must_use]
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerCommand {
    Start,
    Help,
    Add { name: String, address: String },
    List,
    Status { name: String },
    StatusAll,
    StartServer { name: String },
    StopServer { name: String },
    StartAll,
    StopAll,
    IsRunning { name: String },
    Delete { name: String },
    Log { name: String },
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument {
        argument: &'static str,
        usage: String,
    },
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument { argument, usage } => {
                write!(f, "missing argument `{argument}` (usage: {usage})")
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Accepts the `/command@botname` form. Extra arguments are ignored.
pub fn parse_command(text: &str) -> Result<ServerCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    let Some(without_slash) = raw_command.strip_prefix('/') else {
        return Err(CommandParseError::NotACommand);
    };

    let name = without_slash
        .split_once('@')
        .map_or(without_slash, |(head, _)| head);
    let spec = find_command(name)
        .ok_or_else(|| CommandParseError::UnknownCommand(format!("/{name}")))?;

    let args: Vec<&str> = parts.take(spec.args.len()).collect();
    if let Some(missing) = spec.args.get(args.len()) {
        return Err(CommandParseError::MissingArgument {
            argument: missing,
            usage: spec.usage(),
        });
    }

    build_command(spec, &args)
}

fn build_command(spec: &CommandSpec, args: &[&str]) -> Result<ServerCommand, CommandParseError> {
    let name = || args[0].to_string();

    let command = match spec.name {
        "start" => ServerCommand::Start,
        "help" => ServerCommand::Help,
        "add" => ServerCommand::Add {
            name: name(),
            address: args[1].to_string(),
        },
        "list" => ServerCommand::List,
        "status" => ServerCommand::Status { name: name() },
        "statusall" => ServerCommand::StatusAll,
        "startserver" => ServerCommand::StartServer { name: name() },
        "stopserver" => ServerCommand::StopServer { name: name() },
        "startall" => ServerCommand::StartAll,
        "stopall" => ServerCommand::StopAll,
        "is_running" => ServerCommand::IsRunning { name: name() },
        "delete" => ServerCommand::Delete { name: name() },
        "log" => ServerCommand::Log { name: name() },
        other => return Err(CommandParseError::UnknownCommand(format!("/{other}"))),
    };
    Ok(command)
}

/// Help text returned by `/help` and appended to `/start`.
#[must_use]
pub fn command_help() -> String {
    let mut help = String::from("📋 Commands\n");
    for spec in COMMANDS {
        let _ = write!(help, "\n{} - {}", spec.usage(), spec.description);
    }
    help
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    COMMANDS
        .iter()
        .map(|spec| (spec.name, spec.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Basic command parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_commands_without_arguments() {
        assert_eq!(parse_command("/start").unwrap(), ServerCommand::Start);
        assert_eq!(parse_command("/help").unwrap(), ServerCommand::Help);
        assert_eq!(parse_command("/list").unwrap(), ServerCommand::List);
        assert_eq!(parse_command("/statusall").unwrap(), ServerCommand::StatusAll);
        assert_eq!(parse_command("/startall").unwrap(), ServerCommand::StartAll);
        assert_eq!(parse_command("/stopall").unwrap(), ServerCommand::StopAll);
    }

    #[test]
    fn parse_commands_with_name() {
        let name = || "db1".to_string();
        assert_eq!(
            parse_command("/status db1").unwrap(),
            ServerCommand::Status { name: name() }
        );
        assert_eq!(
            parse_command("/startserver db1").unwrap(),
            ServerCommand::StartServer { name: name() }
        );
        assert_eq!(
            parse_command("/stopserver db1").unwrap(),
            ServerCommand::StopServer { name: name() }
        );
        assert_eq!(
            parse_command("/is_running db1").unwrap(),
            ServerCommand::IsRunning { name: name() }
        );
        assert_eq!(
            parse_command("/delete db1").unwrap(),
            ServerCommand::Delete { name: name() }
        );
        assert_eq!(
            parse_command("/log db1").unwrap(),
            ServerCommand::Log { name: name() }
        );
    }

    #[test]
    fn parse_add() {
        assert_eq!(
            parse_command("/add db1 10.0.0.5:5432").unwrap(),
            ServerCommand::Add {
                name: "db1".into(),
                address: "10.0.0.5:5432".into(),
            }
        );
    }

    #[test]
    fn parse_add_leaves_address_validation_to_registry() {
        assert_eq!(
            parse_command("/add db1 nonsense").unwrap(),
            ServerCommand::Add {
                name: "db1".into(),
                address: "nonsense".into(),
            }
        );
    }

    #[test]
    fn parse_every_table_entry() {
        for spec in COMMANDS {
            let mut text = format!("/{}", spec.name);
            for arg in spec.args {
                text.push(' ');
                text.push_str(if *arg == "host:port" { "10.0.0.1:80" } else { "x" });
            }
            assert!(parse_command(&text).is_ok(), "failed to parse `{text}`");
        }
    }

    // -------------------------------------------------------------------------
    // Bot mention handling
    // -------------------------------------------------------------------------

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/status@basoka_bot db1").unwrap(),
            ServerCommand::Status { name: "db1".into() }
        );
        assert_eq!(parse_command("/list@BOT").unwrap(), ServerCommand::List);
    }

    // -------------------------------------------------------------------------
    // Error cases
    // -------------------------------------------------------------------------

    #[test]
    fn parse_not_a_command() {
        for text in ["hello", "", "   ", "db1 /status"] {
            assert_eq!(parse_command(text), Err(CommandParseError::NotACommand));
        }
    }

    #[test]
    fn parse_unknown_command() {
        let err = parse_command("/reboot").unwrap_err();
        assert_eq!(err, CommandParseError::UnknownCommand("/reboot".into()));
    }

    #[test]
    fn parse_slash_only() {
        assert_eq!(
            parse_command("/").unwrap_err(),
            CommandParseError::UnknownCommand("/".into())
        );
    }

    #[test]
    fn parse_command_case_sensitivity() {
        assert!(matches!(
            parse_command("/LIST"),
            Err(CommandParseError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command("/Status db1"),
            Err(CommandParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn parse_missing_name() {
        assert_eq!(
            parse_command("/status").unwrap_err(),
            CommandParseError::MissingArgument {
                argument: "name",
                usage: "/status <name>".into(),
            }
        );
    }

    #[test]
    fn parse_add_missing_address() {
        assert_eq!(
            parse_command("/add db1").unwrap_err(),
            CommandParseError::MissingArgument {
                argument: "host:port",
                usage: "/add <name> <host:port>".into(),
            }
        );
    }

    // -------------------------------------------------------------------------
    // Edge cases
    // -------------------------------------------------------------------------

    #[test]
    fn parse_extra_arguments_ignored() {
        assert_eq!(
            parse_command("/delete db1 db2").unwrap(),
            ServerCommand::Delete { name: "db1".into() }
        );
    }

    #[test]
    fn parse_command_with_mixed_whitespace() {
        assert_eq!(
            parse_command("  /add\tdb1   10.0.0.5:5432  ").unwrap(),
            ServerCommand::Add {
                name: "db1".into(),
                address: "10.0.0.5:5432".into(),
            }
        );
    }

    // -------------------------------------------------------------------------
    // Help and menu registration
    // -------------------------------------------------------------------------

    #[test]
    fn command_help_lists_every_usage() {
        let help = command_help();
        for spec in COMMANDS {
            assert!(help.contains(&spec.usage()), "help is missing /{}", spec.name);
        }
        assert!(help.contains("/add <name> <host:port>"));
    }

    #[test]
    fn bot_commands_match_table() {
        let commands = bot_commands();
        assert_eq!(commands.len(), COMMANDS.len());
        for (cmd, desc) in &commands {
            assert!(!cmd.is_empty());
            assert!(!desc.is_empty(), "empty description for {cmd}");
            assert!(cmd.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn command_names_are_unique() {
        for (i, spec) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS[i + 1..].iter().all(|other| other.name != spec.name),
                "duplicate command /{}",
                spec.name
            );
        }
    }

    #[test]
    fn command_parse_error_display() {
        assert_eq!(
            CommandParseError::NotACommand.to_string(),
            "message is not a command"
        );
        assert_eq!(
            CommandParseError::UnknownCommand("/foo".into()).to_string(),
            "unknown command `/foo`"
        );
        assert_eq!(
            CommandParseError::MissingArgument {
                argument: "name",
                usage: "/log <name>".into(),
            }
            .to_string(),
            "missing argument `name` (usage: /log <name>)"
        );
    }
}
