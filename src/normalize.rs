//! Shell command normalization.
//!
//! Rewrites a command string into the token stream a shell would roughly
//! see, so that rules can match tokens split by quoting or expansion
//! (`ord"er"cli`, `ordercli${X}`, `$(echo rm) -rf /`). This is not a shell
//! parser; it only strips the common bypass artifacts.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMAND_SUBST: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\([^)]*\)").unwrap());
static BACKTICK_SUBST: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]*`").unwrap());
static ANSI_C_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$'[^']*'").unwrap());
static QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["']"#).unwrap());
static BRACED_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());
static BARE_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[A-Za-z_][A-Za-z0-9_]*").unwrap());
static BACKSLASH_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\.").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a shell command string to defeat regex-bypass tricks.
///
/// Steps run in a fixed order, each assuming the previous artifacts are gone:
/// command substitutions (`$(...)`, backticks), ANSI-C quoting (`$'...'`),
/// bare quote characters, variable references (`${VAR}`, `$VAR`),
/// backslash escapes, then whitespace collapsing.
pub fn normalize_shell_command(command: &str) -> String {
    let s = COMMAND_SUBST.replace_all(command, "");
    let s = BACKTICK_SUBST.replace_all(&s, "");
    let s = ANSI_C_QUOTE.replace_all(&s, "");
    let s = QUOTES.replace_all(&s, "");
    let s = BRACED_VAR.replace_all(&s, "");
    let s = BARE_VAR.replace_all(&s, "");
    let s = BACKSLASH_ESCAPE.replace_all(&s, "");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim().to_string()
}
