use std::io::BufRead;

use crate::error::CalcError;

/// Print the prompt and parse the next line as a signed integer.
/// A line that doesn't parse is a hard error, not a silent zero.
pub fn read_operand(input: &mut impl BufRead, prompt: &str) -> Result<i64, CalcError> {
    println!("{}", prompt);
    let line = read_line(input)?;
    let text = line.trim();
    text.parse()
        .map_err(|_| CalcError::BadOperand(text.to_owned()))
}

/// Print the prompt and return the next line with surrounding whitespace
/// (including the line terminator) stripped.
pub fn read_operation(input: &mut impl BufRead, prompt: &str) -> Result<String, CalcError> {
    println!("{}", prompt);
    let line = read_line(input)?;
    Ok(line.trim().to_owned())
}

fn read_line(input: &mut impl BufRead) -> Result<String, CalcError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
