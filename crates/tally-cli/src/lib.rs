use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tally::{
    count_diagonal_pairs_streamed, divisor_counts, dot_product_inequality, rectangle_resonance,
    rectangle_resonance_blocked, PrefixSum, ScanError, Scanner, MOD,
};

/// Contribution-order counting over grids and divisor sieves
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Read input from this file instead of stdin
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Write the answer to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Modulus applied to sieve-based answers
    #[arg(long, global = true, default_value_t = MOD)]
    pub modulus: u64,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Count equal-valued cell pairs sharing a diagonal. Input: `n m` then the grid
    Diagonal,
    /// Sum of resonance energy products over rectangle areas `u * v <= L`. Input: `L`
    Resonance {
        /// Sum over blocks of equal quotient `L / u`
        #[arg(long)]
        blocked: bool,
    },
    /// Count vectors `(a, b)`, `(c, d)` with `a * b + c * d <= L`. Input: `L`
    DotProduct,
    /// Total number of divisors of `1..=L`. Input: `L`
    Divisors,
}

fn read_limit<R: BufRead>(scanner: &mut Scanner<R>) -> anyhow::Result<Option<usize>> {
    match scanner.next::<usize>() {
        Ok(limit) => Ok(Some(limit)),
        Err(ScanError::Exhausted) => Ok(None),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to read L")),
    }
}

/// Runs `command` over `input`, writing the answer followed by a newline.
///
/// Nothing is written when the input ends before `L` is read.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    input: R,
    output: &mut W,
    modulus: u64,
) -> anyhow::Result<()> {
    if !(2..=u64::from(u32::MAX)).contains(&modulus) {
        bail!("Modulus {modulus} must be in 2..=4294967295");
    }

    let mut scanner = Scanner::new(input);
    let answer = match command {
        Command::Diagonal => {
            let scan = count_diagonal_pairs_streamed::<i64, _>(&mut scanner)
                .context("Failed to read grid")?;
            if !scan.complete {
                log::warn!(
                    "Input ended after {} cells, answer covers only those",
                    scan.cells
                );
            }
            scan.answer
        }
        Command::Resonance { blocked } => {
            let Some(limit) = read_limit(&mut scanner)? else {
                log::warn!("No L given");
                return Ok(());
            };
            if blocked {
                rectangle_resonance_blocked(limit, modulus)
            } else {
                rectangle_resonance(limit, modulus)
            }
        }
        Command::DotProduct => {
            let Some(limit) = read_limit(&mut scanner)? else {
                log::warn!("No L given");
                return Ok(());
            };
            dot_product_inequality(limit, modulus)
        }
        Command::Divisors => {
            let Some(limit) = read_limit(&mut scanner)? else {
                log::warn!("No L given");
                return Ok(());
            };
            PrefixSum::modular(&divisor_counts(limit), modulus).at(limit)
        }
    };

    writeln!(output, "{answer}").context("Failed to write answer")?;
    Ok(())
}

pub fn cli(concat_args: Option<&[String]>) -> anyhow::Result<()> {
    let start_instant_cli = Instant::now();

    let mut args: Vec<String> = std::env::args().collect();
    if let Some(concat_args) = concat_args {
        args.extend_from_slice(concat_args);
    };
    let args = Args::parse_from(args);
    log::debug!("{args:?}");

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    run(args.command, input, &mut output, args.modulus)?;
    output.flush().context("Failed to flush output")?;

    log::info!(
        "Done! Took: {} ms",
        start_instant_cli.elapsed().as_millis()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command, input: &str, modulus: u64) -> anyhow::Result<String> {
        let mut output = Vec::new();
        run(command, input.as_bytes(), &mut output, modulus)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::parse_from(["tally", "resonance", "--blocked", "--modulus", "97"]);
        assert_eq!(args.command, Command::Resonance { blocked: true });
        assert_eq!(args.modulus, 97);

        let args = Args::parse_from(["tally", "dot-product", "-i", "in.txt"]);
        assert_eq!(args.command, Command::DotProduct);
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.modulus, MOD);
    }

    #[test]
    fn test_missing_limit_prints_nothing() {
        assert_eq!(run_to_string(Command::Divisors, "  \n", MOD).unwrap(), "");
    }

    #[test]
    fn test_malformed_limit_fails() {
        assert!(run_to_string(Command::DotProduct, "ten", MOD).is_err());
        assert!(run_to_string(Command::Diagonal, "2 2 1 x", MOD).is_err());
    }

    #[test]
    fn test_modulus_bounds() {
        assert!(run_to_string(Command::Divisors, "5", 1).is_err());
        assert!(run_to_string(Command::Divisors, "5", 1 << 32).is_err());
        assert_eq!(run_to_string(Command::Divisors, "5", 7).unwrap(), "3\n");
    }
}
