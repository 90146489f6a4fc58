use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use cooklang_parse::{load_config, CookError, ConvertResult, Format, RecipeConverter};

#[derive(Parser)]
#[command(name = "cooklang-parse")]
#[command(about = "Convert a Cooklang recipe to Markdown, HTML, text, LaTeX or JSON")]
struct Args {
    /// Path to the .cook file
    input: PathBuf,

    /// Output format: markdown, html, text, latex, cooklang or json.
    /// Defaults to the output file extension, then markdown.
    #[arg(short, long, value_parser = parse_format)]
    format: Option<Format>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Mirror the number of `=` markers in heading levels
    #[arg(long)]
    keep_section_depth: bool,

    /// Reject durationless timers and unknown units
    #[arg(long)]
    strict: bool,

    /// Do not derive a title from the file name
    #[arg(long)]
    no_title: bool,

    /// Do not look for an image next to the recipe
    #[arg(long)]
    no_image: bool,
}

fn parse_format(value: &str) -> Result<Format, String> {
    value.parse().map_err(|e: CookError| e.to_string())
}

fn run(args: Args) -> Result<(), CookError> {
    let config = load_config()?;
    debug!("Loaded configuration: {:?}", config);

    let format = args
        .format
        .or_else(|| {
            let extension = args.output.as_ref()?.extension()?.to_str()?;
            Format::ALL
                .into_iter()
                .find(|format| format.extension() == extension)
        })
        .unwrap_or_default();

    let mut loader = config.loader;
    loader.infer_title &= !args.no_title;
    loader.search_image &= !args.no_image;

    let mut builder = RecipeConverter::builder()
        .file(&args.input)
        .format(format)
        .loader(loader)
        .ignore_section_depth(config.render.ignore_section_depth && !args.keep_section_depth);
    if args.strict || config.parser.strict_timers {
        builder = builder.strict_timers();
    }
    if args.strict || config.parser.strict_units {
        builder = builder.strict_units();
    }

    let rendered = match builder.build()? {
        ConvertResult::Rendered(rendered) => rendered,
        ConvertResult::Recipe(recipe) => format.render(&recipe)?,
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            debug!("Wrote {} output to {}", format, path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
