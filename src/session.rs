use std::io::BufRead;

use anyhow::Result;
use log::debug;

use crate::format::{render_glossary, render_report};
use crate::input::{parse_int, InputPair};
use crate::report::Report;

const USAGE: &str = "Commands: n <value> | k <value> | <n> <k> | info | help | quit";

macro_rules! emit {
    ($output:expr, $($arg:tt)*) => {
        ($output)(format!($($arg)*));
    };
}

/// Interactive edit loop: every accepted edit replaces the input pair and
/// prints a freshly computed report.
pub struct Session<F> {
    input: InputPair,
    output: F,
}

impl<F: Fn(String)> Session<F> {
    pub fn new(input: InputPair, output: F) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> InputPair {
        self.input
    }

    pub fn show(&self) {
        for line in render_report(&Report::compute(self.input)) {
            (self.output)(line);
        }
    }

    /// Handles one line of input. Returns `false` once the session should end.
    pub fn apply(&mut self, line: &str) -> bool {
        let words = line.split_whitespace().collect::<Vec<_>>();

        let next = match words.as_slice() {
            [] => return true,
            ["quit" | "exit" | "q"] => return false,
            ["help" | "?"] => {
                emit!(self.output, "{USAGE}");
                return true;
            }
            ["info"] => {
                for line in render_glossary() {
                    (self.output)(line);
                }
                return true;
            }
            ["n", value] => self.input.with_n(parse_int(value)),
            ["k", value] => self.input.with_k(parse_int(value)),
            [n, k] => InputPair::new(parse_int(n), parse_int(k)),
            _ => {
                emit!(self.output, "Unrecognized input: {}", line.trim());
                emit!(self.output, "{USAGE}");
                return true;
            }
        };

        debug!("Input changed from {:?} to {next:?}", self.input);
        self.input = next;
        self.show();
        true
    }

    /// Reads lines until end of input or a quit command.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.show();
        for line in reader.lines() {
            if !self.apply(&line?) {
                break;
            }
        }
        Ok(())
    }
}
