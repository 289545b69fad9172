#![allow(dead_code)]

use minibasic::error;
use minibasic::lang::{number, Error, LineNumber};
use minibasic::mach::{Event, Io, Runtime};
use std::collections::VecDeque;

/// Scripted terminal. Prompts are echoed into `output` so tests
/// see a transcript.
#[derive(Default)]
pub struct Buffer {
    pub output: String,
    pub input: VecDeque<String>,
    pub steps: VecDeque<bool>,
    pub stepped: Vec<LineNumber>,
    pub trace: Vec<String>,
    pub vars: Vec<String>,
}

impl Buffer {
    pub fn with_input(input: &[&str]) -> Buffer {
        Buffer {
            input: input.iter().map(|s| s.to_string()).collect(),
            ..Buffer::default()
        }
    }
}

impl Io for Buffer {
    fn print(&mut self, s: &str) -> Result<(), Error> {
        self.output.push_str(s);
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> Result<String, Error> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(s) => {
                self.output.push_str(&format!("{}\n", s));
                Ok(s)
            }
            None => Err(error!(IoError; "END OF INPUT")),
        }
    }

    fn step(&mut self, line: LineNumber) -> Result<bool, Error> {
        self.stepped.push(line);
        Ok(self.steps.pop_front().unwrap_or(true))
    }

    fn trace(&mut self, event: Event) {
        self.trace.push(match event {
            Event::Executing { line, statement } => format!("{} {}", line, statement),
            Event::Executed {
                line,
                transfer,
                vars,
                ..
            } => {
                let bindings: Vec<String> = vars
                    .iter()
                    .map(|(name, value)| format!("{} = {}", name, number::format(value)))
                    .collect();
                self.vars.push(bindings.join(", "));
                format!("{} -> {}", line, transfer)
            }
        });
    }
}

pub fn runtime(lines: &[&str]) -> Runtime {
    let mut r = Runtime::new();
    for s in lines {
        if let Err(e) = r.enter(s) {
            panic!("{:?} entering {}", e, s);
        }
    }
    r
}

/// Runs the program; a failure is appended to the output.
pub fn exec_with(runtime: &mut Runtime, io: &mut Buffer) -> String {
    if let Err(e) = runtime.run(io) {
        io.output.push_str(&format!("{}\n", e));
    }
    io.output.clone()
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_with(runtime, &mut Buffer::default())
}

pub fn exec_input(runtime: &mut Runtime, input: &[&str]) -> String {
    exec_with(runtime, &mut Buffer::with_input(input))
}
