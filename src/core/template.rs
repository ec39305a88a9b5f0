// src/core/template.rs

//! `{name}` placeholders in step templates.
//!
//! Values come from positional arguments and prompt answers. How a value is
//! inserted depends on where it lands: verbatim into a single argv element or a
//! file body, shell-quoted into a `sh -c` script.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use thiserror::Error;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex =
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid");
}

/// Why a template could not become an argv or script.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// The command template itself has an unterminated quote.
    #[error("Could not split command line '{0}': unbalanced quotes")]
    Unbalanced(String),
    /// A value shlex refuses to quote, such as one with a NUL byte.
    #[error("Value for '{key}' cannot be passed to a shell: {reason}")]
    Unquotable {
        /// Placeholder name.
        key: String,
        /// shlex's explanation.
        reason: String,
    },
}

/// Named values available to a recipe or menu option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    /// No bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (k, v) in iter {
            bindings.insert(k, v);
        }
        bindings
    }
}

/// Replaces every bound placeholder with its value. Unknown placeholders are
/// left untouched.
pub fn render(template: &str, bindings: &Bindings) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| lookup(caps, bindings))
        .into_owned()
}

/// Whether `template` contains at least one `{name}` placeholder.
pub fn has_placeholders(template: &str) -> bool {
    PLACEHOLDER_RE.is_match(template)
}

/// Like `render`, but each value is quoted for `sh`.
pub fn render_shell(template: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    let mut failure = None;
    let rendered = PLACEHOLDER_RE.replace_all(template, |caps: &Captures<'_>| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        match bindings.get(key) {
            Some(value) => match shlex::try_quote(value) {
                Ok(quoted) => quoted.into_owned(),
                Err(e) => {
                    failure.get_or_insert(TemplateError::Unquotable {
                        key: key.to_string(),
                        reason: e.to_string(),
                    });
                    String::new()
                }
            },
            None => lookup(caps, bindings),
        }
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(rendered.into_owned()),
    }
}

/// Splits a command template into argv the way a POSIX shell would, then
/// renders each element. A value containing spaces therefore stays one
/// argument.
pub fn split_command(template: &str, bindings: &Bindings) -> Result<Vec<String>, TemplateError> {
    let tokens =
        shlex::split(template).ok_or_else(|| TemplateError::Unbalanced(template.to_string()))?;
    Ok(tokens.iter().map(|t| render(t, bindings)).collect())
}

fn lookup(caps: &Captures<'_>, bindings: &Bindings) -> String {
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let key = caps.get(1).map_or("", |m| m.as_str());
    match bindings.get(key) {
        Some(value) => value.to_string(),
        None => {
            log::debug!("No value bound for placeholder '{}'", whole);
            whole.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Bindings {
        [("source", "/data"), ("dest", "/mnt/my backups")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_render_substitutes_and_keeps_unknown() {
        assert_eq!(
            render("restic backup {source} --repo {dest} {other}", &bindings()),
            "restic backup /data --repo /mnt/my backups {other}"
        );
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("{service}"));
        assert!(has_placeholders("subvol={snapshot}"));
        assert!(!has_placeholders("status"));
        assert!(!has_placeholders("{}"));
    }

    #[test]
    fn test_split_command_keeps_values_whole() {
        let argv = split_command("sudo btrfs subvolume snapshot {source} {dest}", &bindings())
            .unwrap();
        assert_eq!(
            argv,
            vec!["sudo", "btrfs", "subvolume", "snapshot", "/data", "/mnt/my backups"]
        );
    }

    #[test]
    fn test_split_command_respects_quotes() {
        let argv = split_command("sh -c 'a | b'", &Bindings::new()).unwrap();
        assert_eq!(argv, vec!["sh", "-c", "a | b"]);

        assert!(matches!(
            split_command("echo 'unterminated", &Bindings::new()),
            Err(TemplateError::Unbalanced(_))
        ));
    }

    #[test]
    fn test_render_shell_quotes_values() {
        let script = render_shell("sudo btrfs receive {dest}", &bindings()).unwrap();
        assert_eq!(
            shlex::split(&script).unwrap(),
            vec!["sudo", "btrfs", "receive", "/mnt/my backups"]
        );

        // Shell syntax inside a value stays inside one word.
        let hostile: Bindings = [("dest", "x; rm -rf /")].into_iter().collect();
        let script = render_shell("ls {dest}", &hostile).unwrap();
        assert_eq!(shlex::split(&script).unwrap(), vec!["ls", "x; rm -rf /"]);
    }

    #[test]
    fn test_render_shell_rejects_nul() {
        let bad: Bindings = [("dest", "a\0b")].into_iter().collect();
        assert!(matches!(
            render_shell("ls {dest}", &bad),
            Err(TemplateError::Unquotable { .. })
        ));
    }
}
