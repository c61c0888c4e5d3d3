use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use pratt_lexer::{format_error, tokenize};

const DEFAULT_SOURCE: &str = "./demos/00.lang";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: pratt [source-file]");
    eprintln!("       pratt --help");
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        print_usage();
        process::exit(1);
    }

    let file_path = match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            print_usage();
            return;
        }
        Some(path) => path,
        None => DEFAULT_SOURCE,
    };

    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    println!("Source code: \n{}\n\nTokens:", source);

    let start = Instant::now();
    let tokens = match tokenize(&source, Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            process::exit(1);
        }
    };
    tracing::debug!(elapsed = ?start.elapsed(), "tokenized");

    for token in &tokens {
        token.debug();
    }
}
