mod cli;
mod error;
mod ops;
mod prompt;

use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use colored::Colorize;

use crate::error::CalcError;
use crate::ops::Op;

fn main() {
    let args = cli::CliArgs::parse();

    let stdin = io::stdin();
    let code = match run(&args, &mut stdin.lock()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {}", "error:".red(), err);
            1
        }
    };

    process::exit(code);
}

/// One full session: two operands, one keyword, one result.
fn run(args: &cli::CliArgs, input: &mut impl BufRead) -> Result<(), CalcError> {
    let x = prompt::read_operand(input, "Enter First Number: ")?;
    let y = prompt::read_operand(input, "Enter Second Number: ")?;
    let keyword = prompt::read_operation(input, "What operation do you want to perform: ")?;

    let op = match keyword.parse::<Op>() {
        Ok(op) => op,
        Err(_) => {
            // Recovered locally, still a normal exit.
            println!("Invalid Operation");
            return Ok(());
        }
    };

    if args.verbose {
        eprintln!("x={} y={} op={}", x, y, op);
    }

    let res = op.apply(x, y)?;
    println!("Result is  {}", res);

    Ok(())
}
