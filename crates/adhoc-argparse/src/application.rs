use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::error::{ParseError, ParseResult};
use crate::matches::{Matches, Validator};
use crate::tokens;
use crate::{Argument, Command};

/// Top-level registry of commands plus display metadata.
#[derive(Debug, Clone)]
pub struct Application<V> {
    name: String,
    version: String,
    author: String,
    about: String,
    commands: Vec<Command<V>>,
}

impl<V> Application<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: String::new(),
            author: String::new(),
            about: String::new(),
            commands: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    /// Register a command. When two commands share a name the first one wins.
    pub fn command(mut self, command: Command<V>) -> Self {
        self.commands.push(command);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_author(&self) -> &str {
        &self.author
    }

    pub fn get_about(&self) -> &str {
        &self.about
    }

    pub fn get_commands(&self) -> &[Command<V>] {
        self.commands.as_slice()
    }

    /// Parse `args` (program name already stripped).
    ///
    /// The first token selects the command; every declared argument of that
    /// command is then looked up in the remaining tokens:
    /// - value-taking: the token after the first occurrence of the name, else
    ///   after the alias, else the default
    /// - boolean: the name or alias appears anywhere
    ///
    /// A value-taking flag that is the last token, or is followed by an empty
    /// string, counts as not given. Any required argument left unresolved
    /// fails the whole parse.
    pub fn parse<S>(&self, args: &[S]) -> ParseResult<Matches<V>>
    where
        S: AsRef<str>,
        V: Clone,
    {
        let Some((command_name, rest)) = args.split_first() else {
            return Err(ParseError::invalid_input("no command given"));
        };
        let command_name = command_name.as_ref();

        let Some(command) = self
            .commands
            .iter()
            .find(|c| c.get_name() == command_name)
        else {
            return Err(ParseError::invalid_input(format!(
                "unknown command: {command_name}"
            )));
        };

        let mut values: BTreeMap<String, String> = BTreeMap::new();
        for argument in command.get_arguments() {
            let resolved = if argument.is_takes_value() {
                resolve_value(rest, argument)
            } else {
                let names = [argument.get_name(), argument.get_alias().unwrap_or_default()];
                tokens::flag_present(rest, names).then(String::new)
            };

            match resolved {
                Some(value) => {
                    values
                        .entry(argument.get_name().to_string())
                        .or_insert(value);
                }
                None if argument.is_required() => {
                    return Err(ParseError::invalid_input(format!(
                        "missing required argument: {}",
                        argument.get_name()
                    )));
                }
                None => {}
            }
        }

        Ok(Matches::new(command.get_value().clone(), values))
    }

    /// Render the usage text.
    pub fn usage(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} usage:\n", self.name));
        out.push_str("\t<command> <flags...>\n");
        out.push('\n');
        for command in &self.commands {
            out.push('\t');
            out.push_str(command.get_name());
            let args: Vec<String> = command
                .get_arguments()
                .iter()
                .map(format_argument)
                .collect();
            if !args.is_empty() {
                out.push('\t');
                out.push_str(&args.join(" "));
            }
            out.push('\n');
        }
        out
    }

    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.usage().as_bytes())?;
        out.flush()
    }

    /// Write the usage text to stdout.
    pub fn print_usage(&self) {
        // Usage is best-effort; a closed stdout is not worth failing over.
        let _ = self.write_usage(&mut io::stdout().lock());
    }

    /// Render `<name> <version>` followed by author and about lines when set.
    pub fn version_line(&self) -> String {
        let mut out = if self.version.trim().is_empty() {
            format!("{}\n", self.name)
        } else {
            format!("{} {}\n", self.name, self.version.trim())
        };
        if !self.author.trim().is_empty() {
            out.push_str(&format!("by {}\n", self.author.trim()));
        }
        if !self.about.trim().is_empty() {
            out.push_str(self.about.trim_end());
            out.push('\n');
        }
        out
    }
}

impl<T> Application<Validator<T>> {
    /// Parse `args` and run the matched command's validator.
    pub fn parse_validated<S: AsRef<str>>(&self, args: &[S]) -> ParseResult<T> {
        self.parse(args)?.validate()
    }
}

fn resolve_value<S: AsRef<str>>(rest: &[S], argument: &Argument) -> Option<String> {
    let lookup = |flag: &str| tokens::flag_value(rest, flag).filter(|v| !v.is_empty());
    lookup(argument.get_name())
        .or_else(|| argument.get_alias().and_then(lookup))
        .or(argument.get_default_value())
        .map(str::to_string)
}

fn format_argument(argument: &Argument) -> String {
    let mut out = argument.get_name().to_string();
    if let Some(alias) = argument.get_alias() {
        out.push_str(&format!(" ({alias})"));
    }

    let mut notes: Vec<String> = Vec::new();
    if !argument.get_description().trim().is_empty() {
        notes.push(argument.get_description().trim().to_string());
    }
    let requirement = if argument.is_required() {
        "required"
    } else {
        "optional"
    };
    notes.push(requirement.to_string());
    if let Some(default_value) = argument.get_default_value() {
        notes.push(format!("default {default_value}"));
    }
    out.push_str(&format!(" <{}>", notes.join(", ")));
    out
}
