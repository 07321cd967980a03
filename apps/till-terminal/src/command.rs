//! # Cashier Commands
//!
//! One line of input is one command. Each maps onto a cart gesture of the
//! POS screen.
//!
//! ```text
//! add <id>          tap a product card          → CartStore::add_item
//! remove <id>       tap "−" on an order line    → CartStore::remove_item
//! qty <id> <n>      type a quantity             → CartStore::update_quantity
//! clear             cancel the order            → CartStore::clear_cart
//! list / show       browse products / order details (read only)
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Remove(String),
    Quantity(String, i64),
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' takes fewer arguments")]
    TooManyArguments(&'static str),

    #[error("'{0}' is not a whole number")]
    InvalidQuantity(String),
}

pub const HELP: &str = "\
Commands:
  list              show the product catalog
  add <id>          add one unit of a product
  remove <id>       take one unit off the order
  qty <id> <n>      set a quantity (0 or less removes the line)
  clear             empty the order
  show              print the order summary
  help              this text
  quit              leave";

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => no_args("list", &args, Command::List)?,
            "show" => no_args("show", &args, Command::Show)?,
            "clear" => no_args("clear", &args, Command::Clear)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "add" => Command::Add(one_id("add", &args)?),
            "remove" | "rm" => Command::Remove(one_id("remove", &args)?),
            "qty" => match args.as_slice() {
                [id, n] => {
                    let quantity = n
                        .parse::<i64>()
                        .map_err(|_| CommandError::InvalidQuantity(n.to_string()))?;
                    Command::Quantity(id.to_string(), quantity)
                }
                [] => {
                    return Err(CommandError::MissingArgument {
                        command: "qty",
                        argument: "a product id and a quantity",
                    })
                }
                [_] => {
                    return Err(CommandError::MissingArgument {
                        command: "qty",
                        argument: "a quantity",
                    })
                }
                _ => return Err(CommandError::TooManyArguments("qty")),
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn no_args(name: &'static str, args: &[&str], command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::TooManyArguments(name))
    }
}

fn one_id(name: &'static str, args: &[&str]) -> Result<String, CommandError> {
    match args {
        [id] => Ok(id.to_string()),
        [] => Err(CommandError::MissingArgument {
            command: name,
            argument: "a product id",
        }),
        _ => Err(CommandError::TooManyArguments(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(
            Command::parse("add gel-pen"),
            Ok(Some(Command::Add("gel-pen".to_string())))
        );
        assert_eq!(
            Command::parse("  RM  gel-pen "),
            Ok(Some(Command::Remove("gel-pen".to_string())))
        );
        assert_eq!(
            Command::parse("qty tape -3"),
            Ok(Some(Command::Quantity("tape".to_string(), -3)))
        );
        assert_eq!(Command::parse("clear"), Ok(Some(Command::Clear)));
    }

    #[test]
    fn test_parse_read_only_commands() {
        assert_eq!(Command::parse("ls"), Ok(Some(Command::List)));
        assert_eq!(Command::parse("show"), Ok(Some(Command::Show)));
        assert_eq!(Command::parse("?"), Ok(Some(Command::Help)));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("checkout"),
            Err(CommandError::Unknown("checkout".to_string()))
        );
        assert!(matches!(
            Command::parse("add"),
            Err(CommandError::MissingArgument { command: "add", .. })
        ));
        assert_eq!(
            Command::parse("add a b"),
            Err(CommandError::TooManyArguments("add"))
        );
        assert_eq!(
            Command::parse("qty tape lots"),
            Err(CommandError::InvalidQuantity("lots".to_string()))
        );
        assert!(matches!(
            Command::parse("qty tape"),
            Err(CommandError::MissingArgument { argument: "a quantity", .. })
        ));
        assert_eq!(
            Command::parse("show everything"),
            Err(CommandError::TooManyArguments("show"))
        );
    }
}
