use crate::input::RawOptions;

/// Note taking from the command line
#[derive(clap::Parser, Debug)]
#[command(version = "0.1", about = "Take, list and delete notes", long_about = None)]
pub(super) struct Args {
    /// Add a note with the given text
    #[arg(short, long, value_name = "TEXT")]
    pub add: Option<String>,

    /// List stored notes
    #[arg(short, long)]
    pub list: bool,

    /// Delete the note with the given identifier
    #[arg(short, long, value_name = "ID")]
    pub delete: Option<String>,

    /// Category the action applies to
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,
}

impl From<Args> for RawOptions {
    /// Collapse the clap surface into the flag bag the interpreter reads.
    /// Only flags that were actually given end up as keys.
    fn from(args: Args) -> Self {
        let mut options = RawOptions::default();

        if let Some(text) = args.add {
            options.insert("add", text);
        }
        if args.list {
            options.insert("list", true);
        }
        if let Some(id) = args.delete {
            options.insert("delete", id);
        }
        if let Some(name) = args.category {
            options.insert("category", name);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::input::{self, Action};

    #[test]
    fn argv_reaches_the_interpreter() {
        let args =
            Args::try_parse_from(["jot", "-a", "buy milk", "-c", "groceries"]).expect("valid argv");

        let command = input::parse(&args.into());

        assert_eq!(command.action, Some(Action::Add));
        assert_eq!(command.payload.as_deref(), Some("buy milk"));
        assert_eq!(command.category.as_deref(), Some("groceries"));
    }

    #[test]
    fn bare_list_flag_becomes_boolean() {
        let args = Args::try_parse_from(["jot", "--list"]).expect("valid argv");

        let command = input::parse(&args.into());

        assert_eq!(command.action, Some(Action::List));
        assert_eq!(command.payload, None);
    }

    #[test]
    fn no_flags_yield_an_invalid_command() {
        let args = Args::try_parse_from(["jot"]).expect("valid argv");

        assert!(!input::parse(&args.into()).is_valid());
    }
}
