use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    /// Whether a menu can be driven on this terminal at all
    pub fn is_interactive(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdin().is_terminal(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdin_tty: bool,
    stdout_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        stdin_tty,
        stdout_tty,
        supports_unicode,
        width,
        height,
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            // The first variable that is set decides.
            if !v.is_empty() {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], tty: bool, size: Option<(u16, u16)>) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), tty, tty, size)
    }

    #[test]
    fn detect_term_dumb_disables_unicode() {
        let c = caps(&[("TERM", "dumb"), ("LANG", "en_US.UTF-8")], true, None);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_posix_locale_disables_unicode() {
        let c = caps(&[("TERM", "xterm"), ("LC_ALL", "C")], true, None);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_utf8_locale() {
        let c = caps(&[("TERM", "xterm"), ("LANG", "de_DE.utf8")], true, None);
        assert!(c.supports_unicode);
    }

    #[test]
    fn detect_defaults_size_when_unknown() {
        let c = caps(&[], false, None);
        assert_eq!((c.width, c.height), (80, 24));
        assert!(!c.is_interactive());

        let c = caps(&[], true, Some((132, 50)));
        assert_eq!((c.width, c.height), (132, 50));
        assert!(c.is_interactive());
    }
}
