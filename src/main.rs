use std::fs;

use clap::Parser;
use reckon::get_result;

/// reckon is a small command line calculator for flat arithmetic expressions:
/// numbers joined by `+`, `-`, `x` (or `*`) and `/`, evaluated with the usual
/// precedence and left to right within a tier. No parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the result with a decimal comma instead of a decimal point.
    #[arg(short, long)]
    comma: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match get_result(&expression) {
        Ok(result) => {
            let rendered = result.to_string();
            if args.comma {
                println!("{}", rendered.replace('.', ","));
            } else {
                println!("{rendered}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
