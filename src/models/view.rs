use std::fmt;
use std::str::FromStr;

/// A page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Learn,
    Patterns,
    Refactoring,
    Quiz,
    Chat,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Learn,
        View::Patterns,
        View::Refactoring,
        View::Quiz,
        View::Chat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Learn => "Learn",
            View::Patterns => "Patterns",
            View::Refactoring => "Refactoring",
            View::Quiz => "Quiz",
            View::Chat => "AI Chat",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sidebar shortcut, 1-based.
    pub fn from_shortcut(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(View::Home),
            "learn" => Ok(View::Learn),
            "patterns" => Ok(View::Patterns),
            "refactoring" => Ok(View::Refactoring),
            "quiz" => Ok(View::Quiz),
            "chat" => Ok(View::Chat),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(View::Chat.next(), View::Home);
        assert_eq!(View::Home.previous(), View::Chat);
        assert_eq!(View::Learn.next(), View::Patterns);
        assert_eq!(View::Patterns.next(), View::Refactoring);
        assert_eq!(View::Quiz.previous(), View::Refactoring);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(View::from_shortcut('1'), Some(View::Home));
        assert_eq!(View::from_shortcut('4'), Some(View::Refactoring));
        assert_eq!(View::from_shortcut('5'), Some(View::Quiz));
        assert_eq!(View::from_shortcut('6'), Some(View::Chat));
        assert_eq!(View::from_shortcut('0'), None);
        assert_eq!(View::from_shortcut('7'), None);
        assert_eq!(View::from_shortcut('x'), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Quiz".parse::<View>(), Ok(View::Quiz));
        assert_eq!("refactoring".parse::<View>(), Ok(View::Refactoring));
        assert!("settings".parse::<View>().is_err());
    }
}
