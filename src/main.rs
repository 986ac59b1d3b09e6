use clap::{Parser, Subcommand};
use log::debug;
use serde_json::json;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use unitconv::config::{Config, DEFAULT_CONFIG_FILE};
use unitconv::convert;
use unitconv::session::{parse_command, Reply, Session};
use unitconv::units::Category;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert temperature, length and weight units, and price goods by weight", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (e.g., "Celsius")
        from: String,

        /// Destination unit (e.g., "Fahrenheit")
        to: String,

        /// Conversion category (inferred from the source unit when omitted)
        #[arg(short = 't', long)]
        category: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price of an amount in grams/ml given the price per kg/l
    Price {
        /// Price of 1 kg or 1 l
        unit_price: String,

        /// Amount in grams or millilitres
        amount: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories, or the units of one category
    Units {
        /// Category name (e.g., "Length")
        category: Option<String>,
    },

    /// Evaluate an expression such as "100 Celsius to Fahrenheit"
    Quick {
        /// Conversion expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read session commands from stdin (type "help" for the list)
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            category,
            json,
        } => convert_command(&config, &value, &from, &to, category.as_deref(), json),
        Commands::Price {
            unit_price,
            amount,
            json,
        } => price_command(&config, &unit_price, &amount, json),
        Commands::Units { category } => list_units(category.as_deref()),
        Commands::Quick { expression, json } => quick_command(&config, &expression, json),
        Commands::Interactive => run_interactive(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                debug!("Loading {}", default_path.display());
                Ok(Config::load_from_file(default_path)?)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

fn convert_command(
    config: &Config,
    raw_value: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion =
        convert::resolve_conversion(raw_value, from, to, category, config.display.precision)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion.to_json())?);
    } else {
        println!("Result: {}", conversion.result);
    }

    Ok(())
}

fn price_command(
    config: &Config,
    raw_unit_price: &str,
    raw_amount: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let quote = convert::PriceQuote::new(raw_unit_price, raw_amount, config.display.precision);

    if json {
        println!("{}", serde_json::to_string_pretty(&quote.to_json())?);
    } else {
        println!("Price: {}", quote.display(&config.display.currency));
    }

    Ok(())
}

fn list_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match category {
        Some(name) => {
            let category = name.parse::<Category>()?;
            println!("{} units:", category);
            for unit in category.units() {
                println!("  - {}", unit);
            }
        }
        None => {
            println!("Categories:");
            for category in Category::ALL.iter().filter(|c| **c != Category::None) {
                println!("  - {} ({})", category, category.units().join(", "));
            }
        }
    }

    Ok(())
}

fn quick_command(
    config: &Config,
    expression: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expr = convert::parse_quick(expression)?;
    let result = convert::format_result_with(expr.evaluate(), expr.to, config.display.precision);

    if json {
        let output = json!({
            "input": {
                "value": expr.value,
                "from": expr.from,
                "to": expr.to,
                "category": expr.category,
            },
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {} = {}", expr.value, expr.from, result);
    }

    Ok(())
}

fn run_interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::with_display(config.display.clone());
    if let Some(category) = config.defaults.category {
        session.select_category(category);
    }

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();

    if prompt {
        println!("Type \"help\" for commands.");
    }

    loop {
        if prompt {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line).and_then(|command| session.apply(command)) {
            Ok(Reply::Print(text)) => println!("{}", text),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
