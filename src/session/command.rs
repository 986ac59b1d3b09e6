use crate::convert::{format_result_with, looks_like_quick_expression, parse_quick};
use crate::session::error::SessionError;
use crate::session::state::Session;
use crate::units::Category;
use std::fmt::Write;

/// One line of input to an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Category(String),
    From(String),
    To(String),
    Value(String),
    Convert,
    Price { unit_price: String, amount: String },
    Quick(String),
    Units,
    Show,
    Help,
    Quit,
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Silent,
    Quit,
}

pub const HELP: &str = "\
Commands:
  category <None|Temperature|Length|Weight>
  from <unit>             source unit
  to <unit>               destination unit
  value <number>          value to convert
  convert                 run the conversion
  price <price> <amount>  price of <amount> g/ml at <price> per kg/l
  <n> <unit> to <unit>    one-off conversion, e.g. \"100 Celsius to Fahrenheit\"
  units                   list units for the current category
  show                    print the current selection
  help
  quit";

pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let line = line.trim();
    if looks_like_quick_expression(line) {
        return Ok(Command::Quick(line.to_string()));
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let required = |name: &'static str| -> Result<String, SessionError> {
        if rest.is_empty() {
            Err(SessionError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    match head.to_ascii_lowercase().as_str() {
        "category" => Ok(Command::Category(required("category")?)),
        "from" => Ok(Command::From(required("from")?)),
        "to" => Ok(Command::To(required("to")?)),
        "value" => Ok(Command::Value(required("value")?)),
        "convert" => Ok(Command::Convert),
        "price" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(unit_price), Some(amount)) => Ok(Command::Price {
                    unit_price: unit_price.to_string(),
                    amount: amount.to_string(),
                }),
                _ => Err(SessionError::MissingArgument("price")),
            }
        }
        "units" => Ok(Command::Units),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(SessionError::UnknownCommand(line.to_string())),
    }
}

impl Session {
    pub fn apply(&mut self, command: Command) -> Result<Reply, SessionError> {
        match command {
            Command::Category(name) => {
                let category = name
                    .parse::<Category>()
                    .map_err(|_| SessionError::UnknownCategory(name.clone()))?;
                self.select_category(category);
                Ok(Reply::Silent)
            }
            Command::From(unit) => self.select_from(&unit).map(|_| Reply::Silent),
            Command::To(unit) => self.select_to(&unit).map(|_| Reply::Silent),
            Command::Value(text) => {
                self.set_input(&text);
                Ok(Reply::Silent)
            }
            Command::Convert => self
                .convert()
                .map(|result| Reply::Print(format!("Result: {}", result))),
            Command::Price { unit_price, amount } => {
                self.set_unit_price(&unit_price);
                self.set_amount(&amount);
                Ok(Reply::Print(format!("Price: {}", self.calculate_price())))
            }
            Command::Quick(expression) => {
                let expr = parse_quick(&expression)?;
                let result =
                    format_result_with(expr.evaluate(), expr.to, self.display().precision);
                Ok(Reply::Print(format!("{} {} = {}", expr.value, expr.from, result)))
            }
            Command::Units => {
                if self.category() == Category::None {
                    return Err(SessionError::NoCategory);
                }
                Ok(Reply::Print(self.unit_options().join(", ")))
            }
            Command::Show => Ok(Reply::Print(self.describe())),
            Command::Help => Ok(Reply::Print(HELP.to_string())),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    /// Human-readable summary of the current selection
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Category: {}", self.category());
        if self.category() != Category::None {
            let _ = writeln!(out, "From: {}", self.from_unit());
            let _ = writeln!(out, "To: {}", self.to_unit());
            let _ = writeln!(out, "Value: {}", self.input_value());
        }
        if !self.result().is_empty() {
            let _ = writeln!(out, "Result: {}", self.result());
        }
        let _ = write!(
            out,
            "Convert: {}",
            if self.is_convert_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        out
    }
}
