//! Command interpretation over the raw flag bag.

use std::{
    collections::HashMap,
    fmt::{self, Display},
};

/// A single flag value as handed over by the flag parser. Depending on the
/// invocation the same flag may carry a string or a bare boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OptValue {
    Str(String),
    Flag(bool),
}

impl OptValue {
    /// A flag negated by the parser or carrying an empty string counts as
    /// not given at all.
    fn is_set(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Flag(b) => *b,
        }
    }

    fn usable_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for OptValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for OptValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Unvalidated flag-name to value bag produced by the flag parser. Keys the
/// interpreter does not recognize are simply ignored.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawOptions(HashMap<String, OptValue>);

impl RawOptions {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<OptValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// First alias present with a set value, long flag before short.
    fn resolve(&self, long: &str, short: &str) -> Option<&OptValue> {
        [long, short]
            .into_iter()
            .filter_map(|k| self.0.get(k))
            .find(|v| v.is_set())
    }

    /// First alias carrying a usable string, long flag before short.
    fn resolve_str(&self, long: &str, short: &str) -> Option<&str> {
        [long, short]
            .into_iter()
            .filter_map(|k| self.0.get(k))
            .find_map(OptValue::usable_str)
    }
}

impl<K: Into<String>, V: Into<OptValue>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Add,
    List,
    Delete,
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Delete => "delete",
        })
    }
}

/// Normalized command the note store consumes. A plain value, rebuilt from
/// scratch on every parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Command {
    pub(crate) action: Option<Action>,
    pub(crate) payload: Option<String>,
    pub(crate) category: Option<String>,
}

impl Command {
    /// A command is valid when its action got everything it needs: add and
    /// delete require a payload, list stands alone. No action, no command.
    pub(crate) fn is_valid(&self) -> bool {
        match self.action {
            Some(Action::Add) | Some(Action::Delete) => self.payload.is_some(),
            Some(Action::List) => true,
            None => false,
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{action}")?,
            None => f.write_str("unrecognized")?,
        }
        if let Some(payload) = &self.payload {
            write!(f, " {payload:?}")?;
        }
        if let Some(category) = &self.category {
            write!(f, " (category: {category})")?;
        }
        Ok(())
    }
}

/// Interpret the raw flag bag into a normalized command.
///
/// Never fails: unrecognized or malformed input comes back as unset fields
/// on the command, to be rejected later by [`Command::is_valid`]. When
/// several action flags are present, precedence is add, then list, then
/// delete. The category modifier is resolved independently of the action.
///
/// Add and delete take their payload from the first alias holding a string;
/// an alias present with a boolean still selects the action but leaves the
/// payload unset.
pub(crate) fn parse(options: &RawOptions) -> Command {
    let category = options
        .resolve_str("category", "c")
        .map(ToOwned::to_owned);

    if options.resolve("add", "a").is_some() {
        return Command {
            action: Some(Action::Add),
            payload: options.resolve_str("add", "a").map(ToOwned::to_owned),
            category,
        };
    }

    if options.resolve("list", "l").is_some() {
        return Command {
            action: Some(Action::List),
            payload: None,
            category,
        };
    }

    if options.resolve("delete", "d").is_some() {
        return Command {
            action: Some(Action::Delete),
            payload: options.resolve_str("delete", "d").map(ToOwned::to_owned),
            category,
        };
    }

    Command {
        action: None,
        payload: None,
        category,
    }
}

/// Stateful convenience over [`parse`] holding the last parsed command, so
/// the caller can interleave parsing and validation. Validation itself
/// stays a pure predicate on [`Command`].
#[derive(Debug, Default)]
pub(crate) struct Interpreter {
    command: Option<Command>,
}

impl Interpreter {
    pub(crate) fn parse(&mut self, options: &RawOptions) -> &Command {
        self.command = Some(parse(options));
        self.command.as_ref().expect("just set")
    }

    /// Validity of the held command. Before any parse nothing is held,
    /// which is as invalid as an empty command.
    pub(crate) fn valid(&self) -> bool {
        self.command.as_ref().is_some_and(Command::is_valid)
    }
}
