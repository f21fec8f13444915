use poncho::{
    printer,
    scanner::{self, Scanner},
    Error,
    DEMO,
};
use std::{
    env,
    io::{self, Write},
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> io::Result<()> {
    init_tracing();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    let clean = match args.len() {
        1 => run_prompt(&mut stdout, &mut stderr)?,
        2 if args[1] == "--demo" => Poncho::new(&mut stdout, &mut stderr).run(DEMO)?,
        2 => run_file(args[1].as_str(), &mut stdout, &mut stderr)?,
        _ => {
            writeln!(stdout, "{}", Error::usage())?;
            std::process::exit(64);
        },
    };

    if !clean {
        std::process::exit(65);
    }

    Ok(())
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_file(path: &str, out: &mut io::Stdout, err_out: &mut io::Stderr) -> io::Result<bool> {
    debug!(%path, "reading script");
    let contents = match poncho::read_source(path) {
        Ok(contents) => contents,
        Err(e) => {
            writeln!(err_out, "{}", e)?;
            std::process::exit(66);
        },
    };
    Poncho::new(out, err_out).run(contents.as_str())
}

fn run_prompt(out: &mut io::Stdout, err_out: &mut io::Stderr) -> io::Result<bool> {
    let mut buffer = String::new();
    let stdin = io::stdin();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        // illegal characters are reported but don't end the session
        Poncho::new(&mut *out, &mut *err_out).run(buffer.as_str())?;
    }

    Ok(true)
}

struct Poncho<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
}

impl <Out: Write, ErrOut: Write> Poncho<Out, ErrOut> {
    fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out }
    }

    /// Prints the tokens of `source`, returning false if any were illegal.
    fn run(&mut self, source: &str) -> io::Result<bool> {
        let tokens = Scanner::new(source).scan_tokens();
        debug!(count = tokens.len(), "scanned source");

        printer::print_tokens(&mut self.out, &tokens)?;

        let errors = scanner::check(&tokens);
        for e in errors.iter() {
            writeln!(self.err_out, "{}", e)?;
        }

        Ok(errors.is_empty())
    }
}
