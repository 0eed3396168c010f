// Command-line parsing for the luapat front end

use std::path::PathBuf;

use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};

use luapat::MatchOptions;

pub const VERSION: &str = concat!("luapat ", env!("CARGO_PKG_VERSION"));

pub fn print_usage() {
    eprintln!("usage: luapat <command> [options] <pattern> [subject]");
    eprintln!("Commands:");
    eprintln!("  find      print start, end and captures of the first match");
    eprintln!("  match     print the captures of the first match");
    eprintln!("  gmatch    print the captures of every match, one per line");
    eprintln!("  gsub      print the subject with matches replaced");
    eprintln!("Options:");
    eprintln!("  --init N      start position (find, match)");
    eprintln!("  --plain       literal substring search (find)");
    eprintln!("  --repl TEXT   replacement template (gsub, required)");
    eprintln!("  --max N       at most N substitutions (gsub)");
    eprintln!("  --escape C    escape byte instead of '%'");
    eprintln!("  --depth N     recursion budget per match attempt");
    eprintln!("  --options F   JSON file with max_depth / escape; flags win");
    eprintln!("  --json        print results as JSON");
    eprintln!("  -v            show version information");
    eprintln!("When no subject is given it is read from stdin.");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Find,
    Match,
    GMatch,
    GSub,
}

impl Command {
    fn from_name(name: &str) -> anyhow::Result<Command> {
        Ok(match name {
            "find" => Command::Find,
            "match" => Command::Match,
            "gmatch" => Command::GMatch,
            "gsub" => Command::GSub,
            unk => anyhow::bail!("unrecognized command '{}'", unk),
        })
    }
}

#[derive(Debug)]
pub struct Args {
    pub command: Command,
    pub pattern: String,
    /// `None` reads the subject from stdin
    pub subject: Option<String>,
    pub init: i64,
    pub plain: bool,
    pub repl: Option<String>,
    pub max: Option<usize>,
    pub escape: Option<u8>,
    pub depth: Option<usize>,
    /// JSON options file, applied before `--escape` and `--depth`
    pub options: Option<PathBuf>,
    pub json: bool,
}

impl Args {
    pub fn match_options(&self) -> anyhow::Result<MatchOptions> {
        let mut opts = match &self.options {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("--options: failed to read {}", path.display()))?;
                MatchOptions::from_json(&text)
                    .with_context(|| format!("--options: invalid JSON in {}", path.display()))?
            }
            None => MatchOptions::default(),
        };
        if let Some(esc) = self.escape {
            opts.escape = esc;
        }
        if let Some(depth) = self.depth {
            opts = opts.with_max_depth(depth);
        }
        opts.validate().context("invalid match options")?;
        Ok(opts)
    }
}

/// Parse the command line. Returns `None` when help or version information
/// was printed and there is nothing left to do.
pub fn parse(p: &mut Parser) -> anyhow::Result<Option<Args>> {
    let mut positional = Vec::new();
    let mut init = 1;
    let mut plain = false;
    let mut repl = None;
    let mut max = None;
    let mut escape = None;
    let mut depth = None;
    let mut options = None;
    let mut json = false;

    while let Some(arg) = p.next()? {
        match arg {
            Arg::Short('h') | Arg::Long("help") => {
                print_usage();
                return Ok(None);
            }
            Arg::Short('v') | Arg::Long("version") => {
                println!("{}", VERSION);
                return Ok(None);
            }
            Arg::Long("init") => init = p.value()?.parse().context("--init")?,
            Arg::Long("plain") => plain = true,
            Arg::Long("repl") => repl = Some(p.value()?.string()?),
            Arg::Long("max") => max = Some(p.value()?.parse().context("--max")?),
            Arg::Long("escape") => escape = Some(parse_escape(p)?),
            Arg::Long("depth") => depth = Some(p.value()?.parse().context("--depth")?),
            Arg::Long("options") => options = Some(PathBuf::from(p.value()?)),
            Arg::Long("json") => json = true,
            Arg::Value(value) => positional.push(value.string()?),
            arg => return Err(arg.unexpected().into()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(name) = positional.next() else {
        print_usage();
        anyhow::bail!("missing command");
    };
    let command = Command::from_name(&name)?;
    let pattern = positional.next().context("missing pattern")?;
    let subject = positional.next();
    if let Some(extra) = positional.next() {
        anyhow::bail!("unexpected argument '{}'", extra);
    }

    if plain && command != Command::Find {
        anyhow::bail!("--plain only applies to find");
    }
    if init != 1 && !matches!(command, Command::Find | Command::Match) {
        anyhow::bail!("--init only applies to find and match");
    }
    if command == Command::GSub {
        if repl.is_none() {
            anyhow::bail!("gsub needs --repl");
        }
    } else if repl.is_some() || max.is_some() {
        anyhow::bail!("--repl and --max only apply to gsub");
    }

    Ok(Some(Args {
        command,
        pattern,
        subject,
        init,
        plain,
        repl,
        max,
        escape,
        depth,
        options,
        json,
    }))
}

fn parse_escape(p: &mut Parser) -> anyhow::Result<u8> {
    let value = p.value()?.string()?;
    match value.as_bytes() {
        [b] => Ok(*b),
        _ => anyhow::bail!("--escape: must be a single byte, got '{}'", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> anyhow::Result<Option<Args>> {
        parse(&mut Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_parse_find() {
        let args = parse_from(&["find", "--init", "-3", "--plain", "a.b", "xa.b"])
            .unwrap()
            .unwrap();
        assert_eq!(args.command, Command::Find);
        assert_eq!(args.pattern, "a.b");
        assert_eq!(args.subject.as_deref(), Some("xa.b"));
        assert_eq!(args.init, -3);
        assert!(args.plain);
    }

    #[test]
    fn test_parse_gsub() {
        let args = parse_from(&["gsub", "--repl", "<%1>", "--max", "2", "(%w+)"])
            .unwrap()
            .unwrap();
        assert_eq!(args.command, Command::GSub);
        assert_eq!(args.repl.as_deref(), Some("<%1>"));
        assert_eq!(args.max, Some(2));
        assert_eq!(args.subject, None);
    }

    #[test]
    fn test_parse_escape() {
        let args = parse_from(&["match", "--escape", "@", "--depth", "50", "@d+", "x1"])
            .unwrap()
            .unwrap();
        let opts = args.match_options().unwrap();
        assert_eq!(opts.escape, b'@');
        assert_eq!(opts.max_depth, 50);

        let args = parse_from(&["match", "--escape", "+", "a", "a"]).unwrap().unwrap();
        assert!(args.match_options().is_err());
        assert!(parse_from(&["match", "--escape", "ab", "a"]).is_err());
    }

    #[test]
    fn test_options_file() {
        let path = std::env::temp_dir().join(format!("luapat-opts-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"escape": 64, "max_depth": 30}"#).unwrap();
        let file = path.to_str().unwrap();

        let args = parse_from(&["match", "--options", file, "@d+", "x1"]).unwrap().unwrap();
        let opts = args.match_options().unwrap();
        assert_eq!((opts.escape, opts.max_depth), (b'@', 30));

        // explicit flags override the file
        let args = parse_from(&["match", "--options", file, "--depth", "7", "--escape", "!", "!d", "1"])
            .unwrap()
            .unwrap();
        let opts = args.match_options().unwrap();
        assert_eq!((opts.escape, opts.max_depth), (b'!', 7));

        std::fs::write(&path, r#"{"escape": 43}"#).unwrap();
        let args = parse_from(&["match", "--options", file, "a", "a"]).unwrap().unwrap();
        assert!(args.match_options().is_err());

        std::fs::write(&path, "not json").unwrap();
        let args = parse_from(&["match", "--options", file, "a", "a"]).unwrap().unwrap();
        assert!(args.match_options().is_err());

        std::fs::remove_file(&path).unwrap();
        let args = parse_from(&["match", "--options", file, "a", "a"]).unwrap().unwrap();
        assert!(args.match_options().is_err());
    }

    #[test]
    fn test_parse_rejects_misuse() {
        assert!(parse_from(&["gsub", "a", "b"]).is_err());
        assert!(parse_from(&["match", "--repl", "x", "a"]).is_err());
        assert!(parse_from(&["gmatch", "--plain", "a"]).is_err());
        assert!(parse_from(&["frobnicate", "a"]).is_err());
        assert!(parse_from(&["find"]).is_err());
        assert!(parse_from(&["find", "a", "b", "c"]).is_err());
        assert!(parse_from(&["find", "--bogus", "a"]).is_err());
    }
}
