//! Slash-command parsing shared by the text plugins.

/// A parsed `/name[@bot] args` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub bot: Option<&'a str>,
    pub args: &'a str,
}

impl<'a> Command<'a> {
    /// Parses `text` as a command; `None` when it does not start with `/`.
    pub fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim();
        let rest = text.strip_prefix('/')?;
        let (head, args) = match rest.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (rest, ""),
        };
        let (name, bot) = match head.split_once('@') {
            Some((name, bot)) => (name, Some(bot)),
            None => (head, None),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self { name, bot, args })
    }

    /// Parses `text` and keeps it only if the command is `name`.
    pub fn matching(text: &'a str, name: &str) -> Option<Self> {
        Self::parse(text).filter(|c| c.name.eq_ignore_ascii_case(name))
    }
}
