use super::{Heading, escape, open_section};
use crate::models::{EducationEntry, EducationStatus, EducationSummary};

/// Render the education timeline followed by its summary statistics.
///
/// Education is config-only, so there is no loading or error state; an
/// empty list gets the empty-state panel.
pub fn render_education(
    heading: Heading<'_>,
    entries: &[EducationEntry],
    summary: &EducationSummary,
) -> String {
    let mut html = open_section("education", heading, None);

    if entries.is_empty() {
        html.push_str(
            "<div class=\"empty-state\"><h3>No education entries found</h3>\
             <p>No education entries are available at the moment.</p></div></section>",
        );
        return html;
    }

    html.push_str("<ol class=\"timeline\">");
    for (index, entry) in entries.iter().enumerate() {
        html.push_str(&timeline_entry(index, entry));
    }
    html.push_str("</ol>");

    html.push_str(&format!(
        "<div class=\"summary\">\
         <div class=\"stat\"><strong>{}</strong><span>Degrees Completed</span></div>\
         <div class=\"stat\"><strong>{}</strong><span>Currently Pursuing</span></div>\
         <div class=\"stat\"><strong>{}</strong><span>Years of Education</span></div>\
         </div>",
        summary.completed, summary.in_progress, summary.years
    ));
    html.push_str("</section>");
    html
}

fn timeline_entry(index: usize, entry: &EducationEntry) -> String {
    let side = if index % 2 == 0 { "left" } else { "right" };
    let status_class = match entry.status {
        EducationStatus::Completed => "completed",
        EducationStatus::InProgress => "in-progress",
    };
    format!(
        "<li class=\"timeline-entry {side}\">\
         <span class=\"badge status {status_class}\">{}</span>\
         <h3>{}</h3><h4>{}</h4>\
         <h5>{}</h5><p class=\"location\">📍 {}</p>\
         <p class=\"duration\"><span>{}</span> → <span>{}</span></p>\
         <span class=\"badge level\">🎓 {}</span></li>",
        entry.status.label(),
        escape(&entry.degree),
        escape(&entry.field),
        escape(&entry.institution),
        escape(&entry.location),
        escape(&entry.start_date),
        escape(&entry.end_date),
        escape(entry.level.label()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;

    fn entries() -> Vec<EducationEntry> {
        vec![
            EducationEntry {
                degree: "Bachelor's Degree".into(),
                field: "Computer Science".into(),
                institution: "University".into(),
                location: "Tunis".into(),
                start_date: "2018".into(),
                end_date: "2021".into(),
                status: EducationStatus::Completed,
                level: EducationLevel::Undergraduate,
            },
            EducationEntry {
                degree: "Engineering Degree".into(),
                field: "Software".into(),
                institution: "School".into(),
                location: "Tunis".into(),
                start_date: "2021".into(),
                end_date: "Present".into(),
                status: EducationStatus::InProgress,
                level: EducationLevel::Graduate,
            },
        ]
    }

    fn heading() -> Heading<'static> {
        Heading {
            title: "Education",
            subtitle: "Academic background",
        }
    }

    #[test]
    fn test_timeline_and_summary() {
        let entries = entries();
        let summary = EducationSummary::compute_at(&entries, 2025);
        let html = render_education(heading(), &entries, &summary);

        assert!(html.contains("id=\"education\""));
        assert_eq!(html.matches("<li class=\"timeline-entry").count(), 2);
        assert!(html.contains("timeline-entry left"));
        assert!(html.contains("timeline-entry right"));
        assert!(html.contains(">Completed</span>"));
        assert!(html.contains(">In Progress</span>"));
        assert!(html.contains("Bachelor&#39;s"));
        assert!(html.contains("Engineering&#39;s"));
        assert!(html.contains("<span>2021</span> → <span>Present</span>"));
        assert!(html.contains("<strong>1</strong><span>Degrees Completed</span>"));
        assert!(html.contains("<strong>1</strong><span>Currently Pursuing</span>"));
        assert!(html.contains("<strong>7</strong><span>Years of Education</span>"));
    }

    #[test]
    fn test_empty_education() {
        let html = render_education(heading(), &[], &EducationSummary::default());
        assert!(html.contains("No education entries found"));
        assert!(!html.contains("timeline"));
        assert!(html.ends_with("</section>"));
    }
}
