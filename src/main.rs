use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use jsemit::QuoteChar;
use jsemit::cli::{self, CliError, ConvertOptions, QuoteMode, QuoteOptions};
use log::debug;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "jsemit")]
#[command(about = "jsemit - Render JSON values and strings as JavaScript source")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON value as a JavaScript literal
    Convert {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Emit `var NAME=...;` instead of a bare literal
        #[arg(long = "var", value_name = "NAME")]
        variable: Option<String>,

        /// Quote character used when a string has no better choice
        #[arg(short, long, value_enum)]
        quote: Option<QuoteArg>,

        /// Quote every object key (JSON-compatible output)
        #[arg(long)]
        json_keys: bool,

        /// Wrap the output in a <script> element
        #[arg(long)]
        script_block: bool,
    },

    /// Quote text as a JavaScript string literal
    Quote {
        /// The text to quote
        text: String,

        /// Quote character, or `auto` to pick the one needing fewer escapes
        #[arg(short, long, value_enum, default_value_t = QuoteModeArg::Auto)]
        quote: QuoteModeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum QuoteArg {
    Single,
    Double,
}

impl From<QuoteArg> for QuoteChar {
    fn from(arg: QuoteArg) -> Self {
        match arg {
            QuoteArg::Single => QuoteChar::Single,
            QuoteArg::Double => QuoteChar::Double,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum QuoteModeArg {
    Auto,
    Single,
    Double,
}

impl From<QuoteModeArg> for QuoteMode {
    fn from(arg: QuoteModeArg) -> Self {
        match arg {
            QuoteModeArg::Auto => QuoteMode::Auto,
            QuoteModeArg::Single => QuoteMode::Fixed(QuoteChar::Single),
            QuoteModeArg::Double => QuoteMode::Fixed(QuoteChar::Double),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            variable,
            quote,
            json_keys,
            script_block,
        } => run_convert(input, variable, quote, json_keys, script_block),
        Commands::Quote { text, quote } => {
            let options = QuoteOptions {
                text,
                mode: quote.into(),
            };
            println!("{}", cli::execute_quote(&options));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_convert(
    input: Option<String>,
    variable: Option<String>,
    quote: Option<QuoteArg>,
    json_keys: bool,
    script_block: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = ConvertOptions {
        input,
        variable,
        quote_char: quote.map(QuoteChar::from),
        json_keys,
        script_block,
    };
    debug!("{:?}", options);

    println!("{}", cli::execute_convert(&options)?);
    Ok(())
}
