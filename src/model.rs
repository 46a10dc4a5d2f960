// Shared data model used across state, input handling, and rendering.
// - Defines app enums (focus targets, tabs, panel kinds, and form fields).
// - Defines which transform methods each text panel offers.
// - Keeps common types decoupled from module-specific logic.
use crate::transform::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Output,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Form => Self::Output,
            Self::Output => Self::Form,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Encrypt,
    Encode,
    Analyze,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Encrypt, Self::Encode, Self::Analyze];

    pub fn next(self) -> Self {
        match self {
            Self::Encrypt => Self::Encode,
            Self::Encode => Self::Analyze,
            Self::Analyze => Self::Encrypt,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Encrypt => Self::Analyze,
            Self::Encode => Self::Encrypt,
            Self::Analyze => Self::Encode,
        }
    }

    pub fn number(self) -> usize {
        match self {
            Self::Encrypt => 1,
            Self::Encode => 2,
            Self::Analyze => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Encode => "Encode",
            Self::Analyze => "Analyze",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Encode => "encode",
            Self::Analyze => "analyze",
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Self::Encrypt),
            2 => Some(Self::Encode),
            3 => Some(Self::Analyze),
            _ => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.into_iter().find(|tab| tab.id().eq_ignore_ascii_case(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Encryption,
    Encoding,
}

impl PanelKind {
    pub fn methods(self) -> &'static [Method] {
        match self {
            Self::Encryption => &[Method::SimulatedMd5, Method::Base64, Method::Reverse],
            Self::Encoding => &[Method::Unicode, Method::Url, Method::Base64],
        }
    }

    pub fn default_method(self) -> Method {
        self.methods()[0]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Encryption => "Encryption tool",
            Self::Encoding => "Encoding converter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Encryption => "Supports several encryption methods",
            Self::Encoding => "Supports several encoding conversions",
        }
    }

    pub fn run_label(self) -> &'static str {
        match self {
            Self::Encryption => "encrypt",
            Self::Encoding => "convert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Method,
    Text,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            Self::Method => Self::Text,
            Self::Text => Self::Method,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisField {
    Url,
    Action,
}

impl AnalysisField {
    pub fn next(self) -> Self {
        match self {
            Self::Url => Self::Action,
            Self::Action => Self::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_wraps_both_ways() {
        assert_eq!(Tab::Analyze.next(), Tab::Encrypt);
        assert_eq!(Tab::Encrypt.previous(), Tab::Analyze);
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn tab_numbers_and_ids_resolve() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_number(tab.number()), Some(tab));
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_id("hello"), None);
    }

    #[test]
    fn panel_defaults_match_first_method() {
        assert_eq!(PanelKind::Encryption.default_method(), Method::SimulatedMd5);
        assert_eq!(PanelKind::Encoding.default_method(), Method::Unicode);
    }
}
