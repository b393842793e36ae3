use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shopping,
    Work,
    Health,
    Errand,
    Home,
    Social,
    Personal,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Shopping,
        Category::Work,
        Category::Health,
        Category::Errand,
        Category::Home,
        Category::Social,
        Category::Personal,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Shopping => "shopping",
            Category::Work => "work",
            Category::Health => "health",
            Category::Errand => "errand",
            Category::Home => "home",
            Category::Social => "social",
            Category::Personal => "personal",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_db_str() == s)
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Shopping => "🛒",
            Category::Work => "💼",
            Category::Health => "🩺",
            Category::Errand => "📦",
            Category::Home => "🏠",
            Category::Social => "👥",
            Category::Personal => "📝",
        }
    }
}
