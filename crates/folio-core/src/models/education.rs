use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// One entry of the education timeline. Bundled content only, never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    /// Degree name.
    pub degree: String,
    /// Field of study.
    pub field: String,
    /// Institution name.
    pub institution: String,
    /// City and country.
    pub location: String,
    /// Start date, free-form (usually a year).
    pub start_date: String,
    /// End date, free-form (a year or "Present").
    pub end_date: String,
    /// Completion status.
    pub status: EducationStatus,
    /// Degree level.
    pub level: EducationLevel,
}

/// Completion status of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStatus {
    /// Degree obtained.
    #[serde(rename = "completed")]
    Completed,
    /// Degree being pursued.
    #[serde(rename = "in progress", alias = "in-progress")]
    InProgress,
}

impl EducationStatus {
    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

/// Degree level of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    /// Bachelor-level studies.
    Undergraduate,
    /// Engineering or master-level studies.
    Graduate,
}

impl EducationLevel {
    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Bachelor's",
            Self::Graduate => "Engineering's",
        }
    }
}

/// Counts shown under the education timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EducationSummary {
    /// Entries with [`EducationStatus::Completed`].
    pub completed: usize,
    /// Entries with [`EducationStatus::InProgress`].
    pub in_progress: usize,
    /// Years between the earliest start and the latest end.
    pub years: u32,
}

impl EducationSummary {
    /// Summarize entries, treating open-ended entries as ending this year.
    pub fn compute(entries: &[EducationEntry]) -> Self {
        Self::compute_at(entries, chrono::Utc::now().year())
    }

    /// Summarize entries with an explicit current year.
    ///
    /// Entries without a parseable start year do not contribute to the
    /// span; an end date without a year counts as `current_year`.
    pub fn compute_at(entries: &[EducationEntry], current_year: i32) -> Self {
        let completed = entries
            .iter()
            .filter(|e| e.status == EducationStatus::Completed)
            .count();
        let in_progress = entries
            .iter()
            .filter(|e| e.status == EducationStatus::InProgress)
            .count();

        let spans: Vec<(i32, i32)> = entries
            .iter()
            .filter_map(|e| {
                let start = leading_year(&e.start_date)?;
                let end = leading_year(&e.end_date).unwrap_or(current_year);
                Some((start, end))
            })
            .collect();

        let years = match (
            spans.iter().map(|(s, _)| *s).min(),
            spans.iter().map(|(_, e)| *e).max(),
        ) {
            (Some(first), Some(last)) if last > first => (last - first) as u32,
            _ => 0,
        };

        Self {
            completed,
            in_progress,
            years,
        }
    }
}

/// First run of four ASCII digits in `s`, as a year.
fn leading_year(s: &str) -> Option<i32> {
    let bytes = s.as_bytes();
    bytes
        .windows(4)
        .position(|w| w.iter().all(u8::is_ascii_digit))
        .and_then(|i| s[i..i + 4].parse().ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(start: &str, end: &str, status: EducationStatus) -> EducationEntry {
        EducationEntry {
            degree: "Degree".into(),
            field: "Field".into(),
            institution: "School".into(),
            location: "City".into(),
            start_date: start.into(),
            end_date: end.into(),
            status,
            level: EducationLevel::Undergraduate,
        }
    }

    #[test]
    fn test_status_wire_names() {
        let s: EducationStatus = serde_json::from_str(r#""in progress""#).unwrap();
        assert_eq!(s, EducationStatus::InProgress);
        let s: EducationStatus = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(s, EducationStatus::InProgress);
        let s: EducationStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(s, EducationStatus::Completed);
        assert_eq!(
            serde_json::to_string(&EducationStatus::InProgress).unwrap(),
            r#""in progress""#
        );
    }

    #[test]
    fn test_entry_camel_case_fields() {
        let json = r#"{
            "degree": "Bachelor",
            "field": "Computer Science",
            "institution": "University",
            "location": "Paris, France",
            "startDate": "2018",
            "endDate": "2021",
            "status": "completed",
            "level": "undergraduate"
        }"#;
        let e: EducationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.start_date, "2018");
        assert_eq!(e.level, EducationLevel::Undergraduate);
        assert_eq!(e.level.label(), "Bachelor's");
        assert_eq!(e.status.label(), "Completed");
    }

    #[test]
    fn test_summary_counts_and_years() {
        let entries = vec![
            entry("2018", "2021", EducationStatus::Completed),
            entry("Sep 2021", "Present", EducationStatus::InProgress),
        ];
        let summary = EducationSummary::compute_at(&entries, 2025);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.years, 7);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            EducationSummary::compute_at(&[], 2025),
            EducationSummary::default()
        );
    }

    #[test]
    fn test_summary_ignores_unparseable_start() {
        let entries = vec![
            entry("unknown", "2030", EducationStatus::Completed),
            entry("2019", "2020", EducationStatus::Completed),
        ];
        let summary = EducationSummary::compute_at(&entries, 2025);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.years, 1);
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("2021"), Some(2021));
        assert_eq!(leading_year("Sept. 2019"), Some(2019));
        assert_eq!(leading_year("Present"), None);
        assert_eq!(leading_year("19"), None);
    }
}
