use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Result;
use clap::Parser;

mod dto;
mod format;
mod model;
mod session;

use clap::Subcommand;

use model::locale::CurrencyFormat;

#[derive(Parser)]
#[command()]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Locale used for currency formatting, e.g. "en-US"
    #[arg(long = "locale")]
    locale: Option<String>,

    /// Extra locale definitions file
    #[arg(long = "locales-path")]
    locales_path: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the tip for a bill amount
    Tip(TipArgs),

    /// Recompute the tip line by line as inputs change
    Interactive,
}

#[derive(Parser)]
struct TipArgs {
    /// Bill amount as entered, e.g. "42.50"
    bill: String,

    /// Tip percentage, where 15 means 15%. Defaults to 15
    #[arg(long = "percent")]
    percent: Option<String>,

    /// Round the tip up to the next whole currency unit
    #[arg(long = "round-up", default_value = "false")]
    round_up: bool,
}

fn run_command(command: Command, format: CurrencyFormat) -> Result<()> {
    match command {
        Command::Tip(args) => {
            let tip = model::tip::compute_tip(
                &args.bill,
                args.percent.as_deref(),
                Some(args.round_up),
                &format,
            );

            println!("{tip}");
        }
        Command::Interactive => run_interactive(format)?,
    }

    Ok(())
}

fn run_interactive(format: CurrencyFormat) -> Result<()> {
    let mut session = session::Session::new(format);

    println!("Tip: {}", session.render());

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match session::Edit::parse(line) {
            Some(edit) => println!("Tip: {}", session.apply(edit)),
            None => println!("Commands: bill <amount>, percent <percent>, round on|off, clear, quit"),
        }
    }

    Ok(())
}

fn resolve_format(args: &Cli) -> Result<CurrencyFormat> {
    let mut registry = model::locale::LocaleRegistry::builtin();

    if let Some(path) = &args.locales_path {
        for entry in dto::load_locales(Path::new(path))? {
            registry.add(entry);
        }
    }

    let format = match &args.locale {
        Some(tag) => registry.resolve(tag)?,
        None => model::locale::detect_tag()
            .and_then(|tag| registry.resolve(&tag).ok())
            .unwrap_or_else(CurrencyFormat::us_dollars),
    };

    Ok(format)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let format = resolve_format(&args)?;

    run_command(args.command, format)
}
