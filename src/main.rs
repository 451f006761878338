use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use boundread::{
    error::ReadResult,
    kind::numeric::{Number, NumericKind},
    reader::{
        core::{BoundedNumberReader, ReaderConfig},
        sink::WriteSink,
        source::TokenReader,
    },
};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// boundread keeps asking for a number until one fits the chosen numeric
/// type, then prints it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Target kind: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bigint or
    /// bigdecimal.
    #[arg(default_value = "bigdecimal")]
    kind: NumericKind,

    /// Prompt written before every attempt. Defaults to "Enter a <kind>: ".
    #[arg(short, long)]
    prompt: Option<String>,

    /// Reads tokens from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Does not print the kind's range before reading.
    #[arg(short, long)]
    quiet: bool,

    /// Explains every rejected token.
    #[arg(short, long)]
    echo: bool,

    /// Refuses numbers whose plain form is longer than this many characters.
    #[arg(long)]
    digit_limit: Option<u64>,

    /// Raises log verbosity; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let config = ReaderConfig::default().with_show_range(!args.quiet)
                                        .with_echo_rejections(args.echo)
                                        .with_digit_limit(args.digit_limit);
    let reader = BoundedNumberReader::new(config);
    let prompt = args.prompt
                     .clone()
                     .unwrap_or_else(|| format!("Enter a {}: ", args.kind));

    let result = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                                           eprintln!("Failed to open the input file '{}'. Perhaps this file does not exist?",
                                                     path.display());
                                           std::process::exit(1);
                                       });
            run(&reader, &prompt, BufReader::new(file), args.kind)
        },
        None => run(&reader, &prompt, io::stdin().lock(), args.kind),
    };

    match result {
        Ok(number) => println!("Got {} {number}", number.kind()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn run(reader: &BoundedNumberReader,
       prompt: &str,
       input: impl io::BufRead,
       kind: NumericKind)
       -> ReadResult<Number> {
    let mut input = TokenReader::new(input);
    let mut output = WriteSink::new(io::stdout().lock());
    reader.read_number(prompt, &mut input, &mut output, kind)
}
