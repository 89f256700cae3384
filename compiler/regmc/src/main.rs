//! regm CLI
//!
//! Runs, inspects and times the reference register-machine programs.

use regmc::commands::{bench, parse_bench_args, parse_run_args, run, show};
use regmc::CliError;

fn main() {
    regmc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];

    let result = match command.as_str() {
        "run" => parse_run_args(rest).map(|options| run(&options)),
        "bench" => parse_bench_args(rest).map(|options| bench(&options)),
        "show" => show(rest),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => Err(CliError::UnknownCommand {
            name: other.to_string(),
        }),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: regm <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program> <n> [--strategy=<s>]   Evaluate a program on input n");
    eprintln!("  bench [<program>] [--n=<n>] [--iters=<k>]");
    eprintln!("                                       Time native, interpreted and compiled runs");
    eprintln!("  show <program>                       Print a program's instruction tree");
    eprintln!();
    eprintln!("Programs: fib, sum-n");
    eprintln!("Strategies: native, interpreted, compiled (default)");
    eprintln!();
    eprintln!("Set RUST_LOG=regm_eval=debug to trace specialization.");
}
