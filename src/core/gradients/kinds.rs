#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKinds {
    #[default]
    Classic,
    Blocks,
    Dense,
}

impl GradientKinds {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Blocks, Self::Dense];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Blocks => "Blocks",
            Self::Dense => "Dense",
        }
    }

    /// Identifier accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Blocks => "blocks",
            Self::Dense => "dense",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Classic => " .:-=+*#%@",
            Self::Blocks => " ░▒▓█",
            Self::Dense => " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$",
        }
    }
}

impl std::fmt::Display for GradientKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
