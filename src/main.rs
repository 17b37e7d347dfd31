use chordstage::{to_plain_text, Alignment, Song, Style};
use std::env;
use std::fs;
use std::process;

const USAGE: &str = "Usage: chordstage [--transpose N] [--format html|text|json] [--style FILE] [--realign] <input> [output]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Html,
    Text,
    Json,
}

#[derive(Debug)]
struct Options {
    transpose: i32,
    format: Format,
    style: Option<String>,
    realign: bool,
    input: String,
    output: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut transpose = 0;
    let mut format = Format::Html;
    let mut style = None;
    let mut realign = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--transpose" | "-t" => {
                let value = iter.next().ok_or("--transpose needs a value")?;
                transpose = value
                    .parse()
                    .map_err(|_| format!("Invalid semitone offset '{}'", value))?;
            }
            "--format" | "-f" => {
                format = match iter.next().map(String::as_str) {
                    Some("html") => Format::Html,
                    Some("text") => Format::Text,
                    Some("json") => Format::Json,
                    Some(other) => return Err(format!("Unknown format '{}'", other)),
                    None => return Err("--format needs a value".to_string()),
                };
            }
            "--style" | "-s" => {
                style = Some(iter.next().ok_or("--style needs a file")?.clone());
            }
            "--realign" => realign = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next().ok_or("Missing input file")?;
    let output = positional.next();
    if positional.next().is_some() {
        return Err("Too many arguments".to_string());
    }

    Ok(Options {
        transpose,
        format,
        style,
        realign,
        input,
        output,
    })
}

fn run(options: &Options) -> Result<String, String> {
    let song = Song::load(&options.input).map_err(|e| e.to_string())?;
    log::info!(
        "Loaded '{}' ({:?} notation, offset {:+})",
        song.metadata.title.as_deref().unwrap_or(&options.input),
        song.notation(),
        song.offset(options.transpose)
    );

    match options.format {
        Format::Html => {
            let style = match &options.style {
                Some(path) => Style::load(path).map_err(|e| e.to_string())?,
                None => Style::default(),
            };
            Ok(song.render(options.transpose, &style))
        }
        Format::Text => {
            let alignment = if options.realign {
                Alignment::Compensate
            } else {
                Alignment::Drift
            };
            Ok(to_plain_text(&song.analyze(options.transpose), alignment))
        }
        Format::Json => serde_json::to_string_pretty(&song.analyze(options.transpose))
            .map_err(|e| format!("Failed to serialize sheet: {}", e)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let rendered = match run(&options) {
        Ok(rendered) => rendered,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    match &options.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                log::error!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            log::info!("Wrote {:?} output to {}", options.format, path);
        }
        None => println!("{}", rendered),
    }
}
