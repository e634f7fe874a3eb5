/// A news category a subscriber can opt in to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Immigration,
    Tech,
    Finance,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Immigration, Topic::Tech, Topic::Finance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Immigration => "immigration",
            Topic::Tech => "tech",
            Topic::Finance => "finance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Immigration => "Immigration",
            Topic::Tech => "Tech",
            Topic::Finance => "Finance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Topic::Immigration => "UK visa, asylum, and immigration policy updates",
            Topic::Tech => "UK technology sector news and regulations",
            Topic::Finance => "UK financial markets and economic updates",
        }
    }

    /// Case-insensitive comparison against a news item's category tag.
    pub fn matches(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case(self.as_str())
    }

    pub fn parse(s: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|topic| topic.matches(s))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dashboard's category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Topic),
}

impl CategoryFilter {
    /// Unknown or missing values select everything.
    pub fn parse(s: Option<&str>) -> CategoryFilter {
        s.and_then(Topic::parse)
            .map(CategoryFilter::Only)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(topic) => topic.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(topic) => topic.label(),
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(topic) => topic.matches(category),
        }
    }

    pub fn choices() -> [CategoryFilter; 4] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Topic::Immigration),
            CategoryFilter::Only(Topic::Tech),
            CategoryFilter::Only(Topic::Finance),
        ]
    }
}
