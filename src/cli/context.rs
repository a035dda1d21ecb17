//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use log::info;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::entropy::SecureRng;
use crate::error::{Error, Result};
use crate::pass::{Generator, MAX_LENGTH, magic, strength};
use crate::settings::Settings;
use crate::tui::print_help;

/// Largest batch copied to the clipboard in one go.
pub const MAX_CLIPBOARD_COUNT: usize = 1_000;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags()?;

        let mut generator = Generator::new();
        if self.settings.to_clipboard {
            return self.copy_lines(&mut generator);
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_lines(&mut generator, &mut out)
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("magicpass {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<()> {
        if let Some(len) = self.flags.length
            && self.settings.set_length(len)
        {
            prompts::length_clamped(len, self.settings.pass_length);
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.no_special {
            self.settings.use_punctuation = false;
        }
        self.settings.show_strength = self.flags.strength;

        if let Some(word) = &self.flags.magic {
            if !magic::is_eligible(word) {
                return Err(Error::MagicIneligible {
                    min_len: magic::MIN_MAGIC_LENGTH,
                    min_letters: magic::MIN_MAGIC_LETTERS,
                });
            }
            if self.flags.length.is_some() {
                prompts::warn("Warning: --length is ignored with --magic");
            }
            self.settings.magic_word = Some(word.clone());
        }

        if self.flags.clipboard {
            if self.settings.number_of_passwords > MAX_CLIPBOARD_COUNT {
                return Err(Error::InvalidNumber(format!(
                    "{} (clipboard takes at most {} passwords)",
                    self.settings.number_of_passwords, MAX_CLIPBOARD_COUNT
                )));
            }
            match Clipboard::open() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    info!("{}", e);
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.settings.number_of_passwords.max(1)
    }

    /// One output line: a fresh password, with its strength if requested.
    fn line<R: SecureRng>(settings: &Settings, generator: &mut Generator<R>) -> String {
        let mut pass = match &settings.magic_word {
            Some(word) => generator.mask(word),
            None => generator.generate(settings.pass_length, settings.use_punctuation),
        };
        if settings.show_strength {
            let s = strength::estimate(&pass);
            let line = format!("{}\t{:.1} bits ({})", pass, s.bits, s.label);
            pass.zeroize();
            line
        } else {
            pass
        }
    }

    /// Write each password as it is generated; nothing is held past its line.
    fn write_lines<R: SecureRng, W: Write>(
        &self,
        generator: &mut Generator<R>,
        out: &mut W,
    ) -> Result<()> {
        for _ in 0..self.count() {
            let mut line = Self::line(&self.settings, generator);
            let written = writeln!(out, "{}", line);
            line.zeroize();
            written?;
        }
        out.flush()?;
        Ok(())
    }

    fn copy_lines<R: SecureRng>(&mut self, generator: &mut Generator<R>) -> Result<()> {
        let count = self.count();
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Ok(());
        };

        let per_line = MAX_LENGTH + 32;
        let mut joined = String::with_capacity(count * per_line);
        for i in 0..count {
            if i > 0 {
                joined.push('\n');
            }
            let mut line = Self::line(&self.settings, generator);
            joined.push_str(&line);
            line.zeroize();
        }

        let copied = clipboard.copy(&joined);
        joined.zeroize();
        copied?;
        prompts::clipboard_copied(count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn context(list: &[&str]) -> Result<Context> {
        let args: Vec<String> = std::iter::once("magicpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        let mut ctx = Context::new(&args)?;
        ctx.apply_flags()?;
        Ok(ctx)
    }

    fn lines(ctx: &Context) -> Vec<String> {
        let mut out = Vec::new();
        ctx.write_lines(&mut Generator::with_rng(ChaCha20Rng::seed_from_u64(1)), &mut out)
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Accepts a fixed number of lines, then reports a closed pipe.
    struct Capped {
        buf: Vec<u8>,
        max_lines: usize,
    }

    impl Write for Capped {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            if self.buf.iter().filter(|&&b| b == b'\n').count() >= self.max_lines {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn number_and_length_flags() {
        let ctx = context(&["-n", "5", "-l", "20", "--no-special"]).unwrap();
        let out = lines(&ctx);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|p| p.len() == 20));
        assert!(out.iter().all(|p| p.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn length_is_clamped() {
        let ctx = context(&["-q", "-l", "99"]).unwrap();
        assert_eq!(ctx.settings.pass_length, 32);
        assert_eq!(lines(&ctx)[0].len(), 32);
    }

    #[test]
    fn zero_count_still_prints_one() {
        let ctx = context(&["-n", "0"]).unwrap();
        assert_eq!(lines(&ctx).len(), 1);
    }

    #[test]
    fn strength_is_appended() {
        let ctx = context(&["-s"]).unwrap();
        let out = lines(&ctx);
        let (pass, meter) = out[0].split_once('\t').unwrap();
        assert_eq!(pass.len(), 8);
        assert!(meter.ends_with(')') && meter.contains("bits"));
    }

    #[test]
    fn magic_word_is_masked() {
        let ctx = context(&["-m", "tortoiseshell", "-n", "10"]).unwrap();
        for out in lines(&ctx) {
            assert_eq!(out.len(), "tortoiseshell".len());
            for (i, o) in "tortoiseshell".chars().zip(out.chars()) {
                assert!(i == o || magic::substitute(i) == Some(o));
            }
        }
    }

    #[test]
    fn short_magic_word_is_rejected() {
        assert!(matches!(
            context(&["-m", "ab1"]),
            Err(Error::MagicIneligible { .. })
        ));
    }

    #[test]
    fn huge_count_is_streamed() {
        let ctx = context(&["-n", "18446744073709551615"]).unwrap();
        let mut out = Capped { buf: Vec::new(), max_lines: 3 };
        let result = ctx.write_lines(
            &mut Generator::with_rng(ChaCha20Rng::seed_from_u64(2)),
            &mut out,
        );
        assert!(matches!(result, Err(Error::Io(_))));
        let text = String::from_utf8(out.buf).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.len() == 8));
    }

    #[test]
    fn huge_clipboard_count_is_rejected() {
        let err = context(&["-q", "-b", "-n", "18446744073709551615"]).err();
        assert!(matches!(err, Some(Error::InvalidNumber(_))));
        assert_eq!(err.map(|e| e.exit_code()), Some(2));
    }

    #[test]
    fn clipboard_stays_off_without_flag() {
        let ctx = context(&["-n", "2"]).unwrap();
        assert!(!ctx.settings.to_clipboard);
        assert!(ctx.clipboard.is_none());
    }
}
