use super::CliFlags;
use crate::error::{Error, Result};

/// Value following the flag at `args[*i]`, advancing `i` past it.
fn value_of(args: &[String], i: &mut usize) -> Result<String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| Error::MissingValue(flag.clone()))
}

fn number_of(args: &[String], i: &mut usize) -> Result<usize> {
    let raw = value_of(args, i)?;
    raw.parse().map_err(|_| Error::InvalidNumber(raw))
}

/// Parse process arguments; `args[0]` is the program name.
pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--strength" => flags.strength = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => flags.length = Some(number_of(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number_of(args, &mut i)?),
            "-m" | "--magic" => flags.magic = Some(value_of(args, &mut i)?),
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("magicpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn short_and_long_flags() {
        let flags = parse(&args(&["-l", "16", "--number", "3", "-s", "--no-special", "-q"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert!(flags.strength && flags.no_special && flags.quiet);
        assert!(!flags.clipboard);
    }

    #[test]
    fn magic_takes_a_word() {
        let flags = parse(&args(&["--magic", "correct horse", "-b"])).unwrap();
        assert_eq!(flags.magic.as_deref(), Some("correct horse"));
        assert!(flags.clipboard);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&args(&["-x"])), Err(Error::UnknownArg(a)) if a == "-x"));
        assert!(matches!(parse(&args(&["-l", "ten"])), Err(Error::InvalidNumber(a)) if a == "ten"));
        assert!(matches!(parse(&args(&["-n"])), Err(Error::MissingValue(a)) if a == "-n"));
        assert!(matches!(parse(&args(&["--magic"])), Err(Error::MissingValue(_))));
    }
}
