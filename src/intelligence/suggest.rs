use crate::models::category::Category;
use crate::models::priority::Priority;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub category: Category,
    pub priority: Priority,
    pub next_steps: Vec<String>,
    /// Place named in the text, e.g. "the pharmacy" in "pick up pills at the pharmacy".
    pub place_hint: Option<String>,
}

pub struct TaskIntelligence {
    categories: Vec<(Category, Regex)>,
    high: Regex,
    medium: Regex,
    low: Regex,
    place: Regex,
}

fn pattern(p: &str) -> Regex {
    // All patterns are literals below; a failure here is a programming error.
    RegexBuilder::new(p)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid suggestion pattern {p:?}: {e}"))
}

impl Default for TaskIntelligence {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIntelligence {
    pub fn new() -> Self {
        // Checked in order; the first match wins. Errand precedes Work so
        // "post office" is not taken for "office".
        let categories = vec![
            (
                Category::Health,
                pattern(r"\b(doctor|dentist|pharmacy|pills?|prescription|medicine|hospital|clinic|gym|workout|vet)\b"),
            ),
            (
                Category::Shopping,
                pattern(r"\b(buy|purchase|shop(ping)?|groceries|grocery|supermarket|milk|bread|eggs|store|mall)\b"),
            ),
            (
                Category::Errand,
                pattern(r"\b(post office|mail|package|parcel|bank|atm|return|drop off|pick up|pickup|dry cleaning|library)\b"),
            ),
            (
                Category::Work,
                pattern(r"\b(meeting|office|client|report|deadline|presentation|email|boss|colleague|project)\b"),
            ),
            (
                Category::Home,
                pattern(r"\b(clean|laundry|repair|fix|garden|trash|dishes|vacuum|plumber)\b"),
            ),
            (
                Category::Social,
                pattern(r"\b(call|birthday|party|dinner|lunch|coffee|visit|friend|mom|dad|family)\b"),
            ),
        ];

        Self {
            categories,
            high: pattern(r"(\b(urgent|asap|immediately|today|now|overdue|critical)\b|!!)"),
            medium: pattern(r"\b(soon|tomorrow|this week|important)\b"),
            low: pattern(r"\b(someday|eventually|maybe|whenever|sometime)\b"),
            place: pattern(
                r"\b(?:(?:at|near|from)\s+((?:the\s+)?[\w'\- ]+?)|in\s+(the\s+[\w'\- ]+?))\s*(?:[.,;!?]|\b(?:to|for|and|before|after|on|by)\b|$)",
            ),
        }
    }

    pub fn categorize(&self, text: &str) -> Category {
        self.categories
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(c, _)| *c)
            .unwrap_or(Category::Personal)
    }

    pub fn prioritize(&self, text: &str) -> Priority {
        if self.high.is_match(text) {
            Priority::High
        } else if self.medium.is_match(text) {
            Priority::Medium
        } else if self.low.is_match(text) {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    pub fn place_hint(&self, text: &str) -> Option<String> {
        self.place
            .captures(text)
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn next_steps(&self, category: Category) -> Vec<String> {
        let steps: &[&str] = match category {
            Category::Shopping => &[
                "Write down the items you need",
                "Check opening hours",
                "Bring a bag",
            ],
            Category::Work => &[
                "Collect the documents you need",
                "Block time in your calendar",
            ],
            Category::Health => &[
                "Check whether you need an appointment",
                "Bring your ID and prescriptions",
            ],
            Category::Errand => &[
                "Gather what you need to drop off or show",
                "Check opening hours",
            ],
            Category::Home => &["Check you have the supplies", "Set aside time for it"],
            Category::Social => &["Confirm the time with them", "Plan how to get there"],
            Category::Personal => &["Break it into a first small step"],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }

    pub fn suggest(&self, text: &str) -> Suggestion {
        let category = self.categorize(text);
        Suggestion {
            category,
            priority: self.prioritize(text),
            next_steps: self.next_steps(category),
            place_hint: self.place_hint(text),
        }
    }
}
