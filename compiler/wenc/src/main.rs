//! wen numeral driver CLI

use wenc::commands::{check_numerals, parse_num_args, read_numerals, run_num, NumConfig};

fn main() {
    wenc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "num" => {
            let mut config = NumConfig::from_env();
            let numerals = match parse_num_args(&args[2..], &mut config) {
                Ok(numerals) => numerals,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: wenc num [--format=text|ir|double] [numeral...]");
                    std::process::exit(1);
                }
            };

            // No numerals on the command line: one per line from stdin
            let numerals = if numerals.is_empty() {
                match read_numerals(std::io::stdin().lock()) {
                    Ok(lines) => lines,
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                numerals
            };

            if !run_num(&numerals, &config) {
                std::process::exit(2);
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: wenc check <numeral>...");
                std::process::exit(1);
            }
            if check_numerals(&args[2..]) > 0 {
                std::process::exit(2);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("wenc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("wen numeral driver");
    println!();
    println!("Usage: wenc <command> [options]");
    println!();
    println!("Commands:");
    println!("  num [numeral...]     Convert numerals (reads stdin when none given)");
    println!("  check <numeral...>   Verify numerals parse, report the ones that don't");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Num options:");
    println!("  --format=<fmt>       Output: text (default), ir, double");
    println!();
    println!("Environment:");
    println!("  WENC_NUM_FORMAT      Default output format for `num`");
    println!("  RUST_LOG             Tracing filter, e.g. wen_numeral=trace");
}
