//! Tape defaults loaded from an optional user config file.
//!
//! Looks for `bfvm.toml` in the XDG config home and reads a `[tape]`
//! section; anything missing or malformed falls back to the defaults.
//! CLI flags always override these values.
//!
//! ```toml
//! [tape]
//! cells = 30000
//! extensible = true
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::OnceLock;

use cross_xdg::BaseDirs;

/// Tape construction defaults used when the CLI flags are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapeDefaults {
    pub cells: NonZeroUsize,
    pub extensible: bool,
}

impl Default for TapeDefaults {
    fn default() -> Self {
        Self {
            // The conventional Brainfuck tape length.
            cells: NonZeroUsize::new(30_000).unwrap(),
            extensible: false,
        }
    }
}

static TAPE_DEFAULTS: OnceLock<TapeDefaults> = OnceLock::new();

/// The effective tape defaults, loaded from the config file at most once.
pub fn tape_defaults() -> &'static TapeDefaults {
    TAPE_DEFAULTS.get_or_init(|| load_from_config().unwrap_or_default())
}

fn load_from_config() -> Option<TapeDefaults> {
    let base_dirs = BaseDirs::new().unwrap();

    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push("bfvm.toml");

    let content = fs::read_to_string(path).ok()?;
    Some(parse_tape_section(&content))
}

/// Very small hand-rolled parser: look for the [tape] section and
/// key = value pairs. Unknown keys and unparseable values are ignored.
fn parse_tape_section(content: &str) -> TapeDefaults {
    let mut defaults = TapeDefaults::default();
    let mut in_tape = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_tape = &line[1..line.len() - 1] == "tape";
            continue;
        }
        if !in_tape {
            continue;
        }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let value = line[eq + 1..].trim().trim_matches('"');
        match key {
            "cells" => {
                if let Ok(cells) = value.replace('_', "").parse::<NonZeroUsize>() {
                    defaults.cells = cells;
                }
            }
            "extensible" => {
                if let Ok(extensible) = value.parse::<bool>() {
                    defaults.extensible = extensible;
                }
            }
            _ => {}
        }
    }

    defaults
}
