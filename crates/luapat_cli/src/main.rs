use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use luapat::{Captures, MatchOptions, Repl};

mod args;

use args::{Args, Command};

fn main() -> ExitCode {
    env_logger::init();
    match run(&mut lexopt::Parser::from_env()) {
        Ok(true) => ExitCode::SUCCESS,
        // nothing matched
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("luapat: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether anything matched.
fn run(p: &mut lexopt::Parser) -> anyhow::Result<bool> {
    let Some(args) = args::parse(p)? else {
        return Ok(true);
    };
    let opts = args.match_options()?;
    let subject = match &args.subject {
        Some(subject) => subject.as_bytes().to_vec(),
        None => read_stdin()?,
    };
    log::debug!(
        "{:?} on {} byte subject with {:?}",
        args.command,
        subject.len(),
        opts
    );

    let mut out = io::stdout().lock();
    let matched = match args.command {
        Command::Find => run_find(&mut out, &args, &subject, &opts)?,
        Command::Match => run_match(&mut out, &args, &subject, &opts)?,
        Command::GMatch => run_gmatch(&mut out, &args, &subject, &opts)?,
        Command::GSub => run_gsub(&mut out, &args, &subject, &opts)?,
    };
    out.flush()?;
    Ok(matched)
}

/// Subject from stdin, minus one trailing line break.
fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("failed to read subject from stdin")?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn write_captures(out: &mut impl Write, caps: &Captures<'_>) -> io::Result<()> {
    let mut line = Vec::new();
    for (i, cap) in caps.iter().enumerate() {
        if i > 0 {
            line.push(b'\t');
        }
        cap.write_to(&mut line);
    }
    line.push(b'\n');
    out.write_all(&line)
}

fn run_find(
    out: &mut impl Write,
    args: &Args,
    subject: &[u8],
    opts: &MatchOptions,
) -> anyhow::Result<bool> {
    let found = luapat::find_with(
        subject,
        args.pattern.as_bytes(),
        args.init,
        args.plain,
        opts,
    )?;
    let Some(found) = found else {
        if args.json {
            writeln!(out, "null")?;
        }
        return Ok(false);
    };
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&found)?)?;
    } else {
        let mut line = format!("{} {}", found.start, found.end).into_bytes();
        for cap in &found.captures {
            line.push(b' ');
            cap.write_to(&mut line);
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(true)
}

fn run_match(
    out: &mut impl Write,
    args: &Args,
    subject: &[u8],
    opts: &MatchOptions,
) -> anyhow::Result<bool> {
    let caps = luapat::match_with(subject, args.pattern.as_bytes(), args.init, opts)?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&caps)?)?;
    } else if let Some(caps) = &caps {
        write_captures(out, caps)?;
    }
    Ok(caps.is_some())
}

fn run_gmatch(
    out: &mut impl Write,
    args: &Args,
    subject: &[u8],
    opts: &MatchOptions,
) -> anyhow::Result<bool> {
    let iter = luapat::gmatch_with(subject, args.pattern.as_bytes(), opts)?;
    if args.json {
        let all = iter.collect::<Result<Vec<_>, _>>()?;
        writeln!(out, "{}", serde_json::to_string(&all)?)?;
        return Ok(!all.is_empty());
    }
    let mut matched = false;
    for caps in iter {
        write_captures(out, &caps?)?;
        matched = true;
    }
    Ok(matched)
}

fn run_gsub(
    out: &mut impl Write,
    args: &Args,
    subject: &[u8],
    opts: &MatchOptions,
) -> anyhow::Result<bool> {
    let template = args.repl.as_deref().context("gsub needs --repl")?;
    let (result, count) = luapat::gsub_with(
        subject,
        args.pattern.as_bytes(),
        Repl::Template(template.as_bytes()),
        args.max,
        opts,
    )?;
    if args.json {
        let value = serde_json::json!({
            "result": String::from_utf8_lossy(&result),
            "count": count,
        });
        writeln!(out, "{}", value)?;
    } else {
        out.write_all(&result)?;
        out.write_all(b"\n")?;
        eprintln!("{}", count);
    }
    Ok(count > 0)
}
