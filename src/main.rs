use clap::Parser;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmlpath::{
    formatter::FormatConfig,
    parser::config::{ParserConfig, DEFAULT_MAX_DEPTH},
    utils::{format_content, format_outline, parse_xml, query_node, read_file, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XML file path
    #[arg(short, long)]
    file: String,

    /// Path to resolve, e.g. `catalog/book/[1]/@id`
    #[arg(short, long)]
    pattern: Option<String>,

    /// Print an indented outline instead of the content
    #[arg(long)]
    outline: bool,

    /// Spaces per level in the outline
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Maximum element nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let config = ParserConfig {
        max_depth: args.max_depth,
        ..ParserConfig::default()
    };
    let root = parse_xml(&content, config)?;

    let result = match &args.pattern {
        Some(pattern) => {
            info!("Resolving pattern: {}", pattern);
            query_node(&root, pattern)?
        }
        None => root,
    };

    let formatted = if args.outline {
        let config = FormatConfig {
            indent_spaces: args.indent,
            ..FormatConfig::default()
        };
        format_outline(&result, &config)?
    } else {
        format_content(&result)?
    };

    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted)?;
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
