//! The fixed question categories and complexity tiers.

use serde::Serialize;

pub const CATEGORY_COUNT: usize = 5;

/// The five fixed interview-question categories, in canonical output order.
/// Order matters: it drives prompt layout, repair output, and renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technical,
    Behavioral,
    Situational,
    CulturalPersonality,
    ProblemSolving,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Technical,
        Category::Behavioral,
        Category::Situational,
        Category::CulturalPersonality,
        Category::ProblemSolving,
    ];

    /// Display name used in API responses and the generation prompt.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Behavioral => "Behavioral",
            Category::Situational => "Situational",
            Category::CulturalPersonality => "Cultural/Personality",
            Category::ProblemSolving => "Problem-Solving",
        }
    }

    /// Uppercase section header the model is instructed to emit.
    pub fn header(self) -> &'static str {
        match self {
            Category::Technical => "TECHNICAL QUESTIONS",
            Category::Behavioral => "BEHAVIORAL QUESTIONS",
            Category::Situational => "SITUATIONAL QUESTIONS",
            Category::CulturalPersonality => "CULTURAL/PERSONALITY QUESTIONS",
            Category::ProblemSolving => "PROBLEM-SOLVING QUESTIONS",
        }
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Matches a line against the category headers, case-insensitively.
    /// Containment rather than equality, so "## TECHNICAL QUESTIONS:" and
    /// similar decorated headers still match.
    pub fn match_header(line: &str) -> Option<Category> {
        let upper = line.to_uppercase();
        Category::ALL.into_iter().find(|c| upper.contains(c.header()))
    }
}

/// Difficulty tier for the generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Basic,
        Complexity::Intermediate,
        Complexity::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }

    /// Parses a client-supplied complexity string.
    /// Unknown values fall back to Intermediate.
    pub fn parse(s: &str) -> Complexity {
        match s {
            "basic" => Complexity::Basic,
            "advanced" => Complexity::Advanced,
            _ => Complexity::Intermediate,
        }
    }

    /// Qualitative guideline injected into the generation prompt.
    pub fn guideline(self) -> &'static str {
        match self {
            Complexity::Basic => {
                "Create basic-level questions suitable for entry-level candidates or those new \
                 to the field. Questions should cover fundamental concepts, basic terminology, \
                 and simple scenarios that don't require deep expertise."
            }
            Complexity::Intermediate => {
                "Create intermediate-level questions suitable for candidates with 2-3 years of \
                 experience. Questions should require practical knowledge, some depth of \
                 understanding, and the ability to apply concepts in typical scenarios."
            }
            Complexity::Advanced => {
                "Create advanced-level questions suitable for senior candidates with 5+ years \
                 of experience. Questions should be challenging, cover complex scenarios, edge \
                 cases, architectural decisions, and demonstrate deep expertise in the field."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_stable() {
        assert_eq!(Category::ALL[0], Category::Technical);
        assert_eq!(Category::ALL[4], Category::ProblemSolving);
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_match_header_is_case_insensitive() {
        assert_eq!(
            Category::match_header("technical questions:"),
            Some(Category::Technical)
        );
        assert_eq!(
            Category::match_header("CULTURAL/PERSONALITY QUESTIONS"),
            Some(Category::CulturalPersonality)
        );
    }

    #[test]
    fn test_match_header_accepts_decorated_lines() {
        assert_eq!(
            Category::match_header("## Problem-Solving Questions ##"),
            Some(Category::ProblemSolving)
        );
    }

    #[test]
    fn test_match_header_rejects_plain_text() {
        assert_eq!(Category::match_header("Question 3: what is Rust?"), None);
        assert_eq!(Category::match_header(""), None);
    }

    #[test]
    fn test_unknown_complexity_defaults_to_intermediate() {
        assert_eq!(Complexity::parse("expert"), Complexity::Intermediate);
        assert_eq!(Complexity::parse(""), Complexity::Intermediate);
        assert_eq!(Complexity::parse("basic"), Complexity::Basic);
        assert_eq!(Complexity::parse("advanced"), Complexity::Advanced);
    }

    #[test]
    fn test_complexity_serializes_lowercase() {
        let value = serde_json::to_value(Complexity::Advanced).unwrap();
        assert_eq!(value, "advanced");
    }
}
