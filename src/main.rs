use clap::{Parser as ClapParser, Subcommand};
use nodeql::cli::{self, CliError, CompileOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "nodeql")]
#[command(about = "Compile node filter and order statements into SQL fragments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a filter query into a condition fragment
    Filter {
        /// The filter query (reads from stdin if not provided)
        query: Option<String>,

        #[command(flatten)]
        target: Target,
    },

    /// Compile an order statement into an ORDER BY fragment
    Order {
        /// The order statement (reads from stdin if not provided)
        statement: Option<String>,

        #[command(flatten)]
        target: Target,
    },
}

#[derive(clap::Args)]
struct Target {
    /// Builtins map as a JSON object of name/column pairs
    #[arg(short, long)]
    builtins: Option<String>,

    /// Column holding the node's JSON content document
    #[arg(long, default_value = "n.content")]
    content_column: String,

    /// Active locale id for bare `path` references
    #[arg(short, long, default_value = "en")]
    locale: String,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Filter { query, target } => {
            run(query, target, cli::compile_filter)
        }
        Commands::Order { statement, target } => {
            run(statement, target, cli::compile_order)
        }
    };

    match result {
        Ok(fragment) => println!("{}", fragment),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(
    query: Option<String>,
    target: Target,
    compile: fn(&CompileOptions) -> Result<String, CliError>,
) -> Result<String, CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer.trim_end_matches('\n').to_string()
        }
        None => return Err(CliError::NoInput),
    };

    let options = CompileOptions {
        query,
        builtins: target.builtins,
        content_column: target.content_column,
        locale: target.locale,
    };

    compile(&options)
}
