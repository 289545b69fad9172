extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{number, Command, Error, Line};
use crate::mach::{Event, Io, Listing, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, Error>;

const HELP: &str = "\
<n> <statement>   enter or replace program line n
<n>               delete program line n
RUN               run the program
DEBUG             run one line at a time ([ENTER] steps, Q stops)
LIST [a][-[b]]    list the program or a range of lines
CLEAR             erase the program
SAVE \"file\"       write the program to a file
OLD \"file\"        replace the program with one from a file
QUIT              leave (also CTRL-D)
Statements: REM LET PRINT INPUT GOTO IF..THEN END
";

/// Runs the interactive loop, first loading `filename` if given.
pub fn main(filename: Option<String>) {
    let mut runtime = Runtime::new();
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        log::warn!("CTRL-C handler not installed: {}", error);
    }
    if let Some(filename) = filename {
        if let Err(error) = load(&filename).and_then(|s| runtime.load_str(&s)) {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
        }
    }
    if let Err(error) = main_loop(&mut runtime) {
        eprintln!("{}", error);
    }
}

enum Flow {
    Continue,
    Quit,
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        let result = dispatch(runtime, &command, &input, &string);
        command.add_history_unique(string);
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}

fn dispatch<T: Terminal>(
    runtime: &mut Runtime,
    command: &Interface<T>,
    input: &Interface<T>,
    string: &str,
) -> Result<Flow> {
    if !Line::new(string)?.is_direct() {
        runtime.enter(string)?;
        return Ok(Flow::Continue);
    }
    let mut console = Console {
        output: command,
        input,
        tracing: false,
    };
    match Command::parse(string)? {
        Command::Run => runtime.run(&mut console)?,
        Command::Debug => {
            console.tracing = true;
            runtime.debug(&mut console)?
        }
        Command::List(range) => {
            for text in runtime.listing().list(range) {
                console.print(&format!("{}\n", text))?;
            }
        }
        Command::Clear => runtime.clear(),
        Command::Save(filename) => save(runtime.listing(), &filename)?,
        Command::Old(filename) => runtime.load_str(&load(&filename)?)?,
        Command::Help => console.print(HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Connects a running program to the terminal.
struct Console<'a, T: Terminal> {
    output: &'a Interface<T>,
    input: &'a Interface<T>,
    tracing: bool,
}

impl<'a, T: Terminal> Console<'a, T> {
    fn read(&self, prompt: &str) -> Result<ReadResult> {
        self.input.set_prompt(prompt).map_err(io_error)?;
        self.input.read_line().map_err(io_error)
    }
}

impl<'a, T: Terminal> Io for Console<'a, T> {
    fn print(&mut self, s: &str) -> Result<()> {
        self.output.write_fmt(format_args!("{}", s)).map_err(io_error)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.read(prompt)? {
            ReadResult::Input(string) => Ok(string),
            ReadResult::Signal(_) => Err(error!(Break)),
            ReadResult::Eof => Err(error!(IoError; "END OF INPUT")),
        }
    }

    fn step(&mut self, _line: crate::lang::LineNumber) -> Result<bool> {
        match self.read("[ENTER] step, Q stop: ")? {
            ReadResult::Input(string) => Ok(!string.trim().eq_ignore_ascii_case("q")),
            ReadResult::Signal(_) | ReadResult::Eof => Ok(false),
        }
    }

    fn trace(&mut self, event: Event) {
        if !self.tracing {
            return;
        }
        let s = match event {
            Event::Executing { line, statement } => format!("{} {}", line, statement),
            Event::Executed { transfer, vars, .. } => {
                let mut s = format!("  -> {}", transfer);
                for (name, value) in vars.iter() {
                    s.push_str(&format!("\n  {} = {}", name, number::format(value)));
                }
                s
            }
        };
        let s = Style::new().dimmed().paint(s);
        if let Err(error) = self.output.write_fmt(format_args!("{}\n", s)) {
            log::warn!("trace output failed: {}", error);
        }
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(IoError; error.to_string())
}

fn load(filename: &str) -> Result<String> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Err(error!(FileNotFound; filename)),
            _ => return Err(io_error(error)),
        },
    };
    let mut s = String::new();
    file.read_to_string(&mut s).map_err(io_error)?;
    log::debug!("loaded {}", filename);
    Ok(s)
}

fn save(listing: &Listing, filename: &str) -> Result<()> {
    if listing.is_empty() {
        return Err(error!(IoError; "NOTHING TO SAVE"));
    }
    let mut file = File::create(filename).map_err(io_error)?;
    file.write_all(listing.save_string().as_bytes())
        .map_err(io_error)?;
    log::debug!("saved {}", filename);
    Ok(())
}
