//! Interactive menu driving the prime functions.
//!
//! A [Session] reads a menu choice and a number from any [BufRead], runs one request and
//! writes the transcript to any [Write], so the same loop serves the terminal and tests.

use crate::error::{AppError, InputError, Result};
use crate::factor::divisors;
use crate::nt_funcs::{is_prime64, nprimes, primes};
use crate::validate::{parse_number, MIN_CANDIDATE};
use std::convert::TryFrom;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info, trace};

const MENU: [&str; 5] = [
    "Please select an option: ",
    "1. Check if a number is prime",
    "2. Find all primes up to a number",
    "3. Find x primes",
    "4. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CheckPrime,
    PrimesUpTo,
    FirstPrimes,
    Exit,
}

impl FromStr for MenuOption {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::CheckPrime),
            "2" => Ok(MenuOption::PrimesUpTo),
            "3" => Ok(MenuOption::FirstPrimes),
            "4" => Ok(MenuOption::Exit),
            other => Err(InputError::UnknownOption(other.to_string())),
        }
    }
}

/// One pass through the menu: pick an option, enter a number, print the answer.
pub struct Session<R, W> {
    input: R,
    output: W,
    verbose: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, verbose: bool) -> Self {
        Session {
            input,
            output,
            verbose,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        for line in MENU.iter() {
            writeln!(self.output, "{}", line)?;
        }

        let option = self.read_option()?;
        info!(?option, verbose = self.verbose, "menu option selected");
        match option {
            MenuOption::Exit => {
                writeln!(self.output, "Thank you. Exiting now.")?;
                return Ok(());
            }
            MenuOption::CheckPrime => {
                let number = self.read_number()?;
                self.check_prime(number)?;
            }
            MenuOption::PrimesUpTo => {
                let number = self.read_number()?;
                self.primes_up_to(number)?;
            }
            MenuOption::FirstPrimes => {
                let number = self.read_number()?;
                self.first_primes(number)?;
            }
        }

        writeln!(self.output, "Thank you, goodbye.")?;
        Ok(())
    }

    /// Write the prompt and read one line, failing once the input is exhausted
    fn prompt(&mut self, message: &str, expected: &'static str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed { expected });
        }
        Ok(line)
    }

    fn read_option(&mut self) -> Result<MenuOption> {
        loop {
            let line = self.prompt("Enter option: ", "menu option")?;
            match line.parse::<MenuOption>() {
                Ok(option) => return Ok(option),
                Err(e) => trace!(%e, "ignoring menu input"),
            }
        }
    }

    fn read_number(&mut self) -> Result<u64> {
        loop {
            let line = self.prompt("Please enter a positive integer greater than 1: ", "number")?;
            match parse_number(&line, MIN_CANDIDATE) {
                Ok(number) => return Ok(number),
                Err(e) => {
                    trace!(%e, "rejected number input");
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    fn check_prime(&mut self, number: u64) -> Result<()> {
        if is_prime64(number) {
            writeln!(self.output, "Your number, {}, is a prime.", number)?;
            return Ok(());
        }

        writeln!(self.output, "Your number, {}, is not a prime.", number)?;
        if self.verbose {
            let factors = divisors(&number);
            writeln!(self.output, "It has {} factors.", group_digits(factors.len()))?;
            writeln!(self.output, "{}", join(&factors))?;
        }
        Ok(())
    }

    fn primes_up_to(&mut self, number: u64) -> Result<()> {
        let found = self.timed(|| primes(number))?;
        writeln!(
            self.output,
            "Here you go. I found {} prime numbers between 2 and {}.",
            group_digits(found.len()),
            number
        )?;
        if self.verbose {
            writeln!(self.output, "{}", join(&found))?;
        }
        Ok(())
    }

    fn first_primes(&mut self, number: u64) -> Result<()> {
        let count = usize::try_from(number).unwrap_or(usize::MAX);
        let found = self.timed(|| nprimes(count))?;
        writeln!(
            self.output,
            "Here you go. I found the first {} primes for you",
            group_digits(number)
        )?;
        if self.verbose {
            writeln!(self.output, "{}", join(&found))?;
        }
        Ok(())
    }

    /// Run the job between the starting and finished banners, reporting wall-clock time
    fn timed<T>(&mut self, job: impl FnOnce() -> T) -> Result<T> {
        writeln!(self.output, "---- Starting ----")?;
        let start = Instant::now();
        let result = job();
        let elapsed = start.elapsed();
        debug!(?elapsed, "request finished");
        writeln!(
            self.output,
            "---- Finished in {:.3} seconds ----",
            elapsed.as_secs_f64()
        )?;
        Ok(result)
    }
}

/// Format a non-negative integer with `,` between groups of three digits
pub fn group_digits<N: Display>(value: N) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn join<N: Display>(values: &[N]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
