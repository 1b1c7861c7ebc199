//! Pure helpers that turn wire values into display values.

use std::collections::HashSet;

/// Converts a 0.0..=1.0 match score into a whole percentage.
///
/// Out-of-range scores are clamped rather than rejected; the backend should
/// never send them, but a display helper has no good error channel.
#[must_use]
pub fn match_percent(score: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (score.clamp(0.0, 1.0) * 100.0).round() as u8;
    percent
}

/// Qualitative band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLevel {
    Strong,
    Moderate,
    Limited,
}

impl MatchLevel {
    /// Bands: 0.7 and above is strong, 0.4 and above is moderate.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 0.7 {
            MatchLevel::Strong
        } else if score >= 0.4 {
            MatchLevel::Moderate
        } else {
            MatchLevel::Limited
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::Strong => "Strong Match",
            MatchLevel::Moderate => "Moderate Match",
            MatchLevel::Limited => "Limited Match",
        }
    }
}

/// Prepares a skill list for display: case-insensitive dedup, then
/// case-insensitive sort.
///
/// The first spelling of a duplicated skill wins, so "Go" followed by "go"
/// keeps "Go".
#[must_use]
pub fn display_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = skills
        .iter()
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_percent_rounds_to_whole_numbers() {
        assert_eq!(match_percent(0.85), 85);
        assert_eq!(match_percent(0.854), 85);
        assert_eq!(match_percent(0.855), 86);
        assert_eq!(match_percent(1.0), 100);
        assert_eq!(match_percent(0.0), 0);
    }

    #[test]
    fn match_percent_clamps_out_of_range_scores() {
        assert_eq!(match_percent(1.3), 100);
        assert_eq!(match_percent(-0.2), 0);
    }

    #[test]
    fn match_level_band_boundaries() {
        assert_eq!(MatchLevel::for_score(0.7), MatchLevel::Strong);
        assert_eq!(MatchLevel::for_score(0.699), MatchLevel::Moderate);
        assert_eq!(MatchLevel::for_score(0.4), MatchLevel::Moderate);
        assert_eq!(MatchLevel::for_score(0.399), MatchLevel::Limited);
    }

    #[test]
    fn match_level_labels() {
        assert_eq!(MatchLevel::Strong.label(), "Strong Match");
        assert_eq!(MatchLevel::Moderate.label(), "Moderate Match");
        assert_eq!(MatchLevel::Limited.label(), "Limited Match");
    }

    #[test]
    fn display_skills_dedups_case_insensitively_first_wins() {
        let skills = vec!["Go".to_owned(), "go".to_owned(), "SQL".to_owned()];
        assert_eq!(display_skills(&skills), vec!["Go", "SQL"]);
    }

    #[test]
    fn display_skills_sorts_case_insensitively() {
        let skills = vec![
            "docker".to_owned(),
            "Aws".to_owned(),
            "zig".to_owned(),
            "Beam".to_owned(),
        ];
        assert_eq!(display_skills(&skills), vec!["Aws", "Beam", "docker", "zig"]);
    }

    #[test]
    fn display_skills_empty_input() {
        assert!(display_skills(&[]).is_empty());
    }
}
