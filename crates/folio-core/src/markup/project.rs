use super::{RecordMarkup, RenderContext, escape, external_link, image};
use crate::models::Project;

impl RecordMarkup for Project {
    const SECTION_ID: &'static str = "product";

    fn card(&self, index: usize, selected: bool) -> String {
        format!(
            "<article class=\"card{}\" data-index=\"{index}\" aria-selected=\"{selected}\">\
             <h3>{}</h3><p class=\"technologies\">{}</p></article>",
            if selected { " selected" } else { "" },
            escape(&self.title),
            escape(&self.technologies.join(", ")),
        )
    }

    fn detail(&self, ctx: &RenderContext<'_>) -> String {
        let mut html = format!("<div class=\"detail\"><h2>{}</h2>", escape(&self.title));

        if !self.description.is_empty() {
            html.push_str(&format!(
                "<p class=\"description\">{}</p>",
                escape(&self.description)
            ));
        }
        if !self.technologies.is_empty() {
            html.push_str(&format!(
                "<p class=\"technologies\">Technologies: {}</p>",
                escape(&self.technologies.join(", "))
            ));
        }
        if let Some(link) = self.code_link() {
            html.push_str(&external_link(link, "View code"));
        }
        if let Some(video) = self.video() {
            html.push_str(&external_link(video, "Watch demo"));
        }
        if !self.images.is_empty() {
            html.push_str("<div class=\"images\">");
            for (idx, src) in self.images.iter().enumerate() {
                let alt = format!("{} - Image {}", self.title, idx + 1);
                html.push_str(&image(src, &alt, ctx));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html
    }

    fn footer(items: &[Self], _selected: Option<usize>) -> String {
        if items.len() > 1 {
            "<div class=\"section-controls\"><button type=\"button\" class=\"next\" \
             data-action=\"next\">Next project</button></div>"
                .to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Heading, render_section};
    use crate::section::SectionState;

    fn project(title: &str) -> Project {
        Project {
            id: format!("id-{title}"),
            title: title.into(),
            description: "A thing".into(),
            technologies: vec!["Rust".into(), "SQL".into()],
            code_link: "https://example.com/code".into(),
            images: vec!["/img/p.png".into()],
            video: None,
        }
    }

    #[test]
    fn test_project_detail() {
        let html = project("Folio").detail(&RenderContext::default());
        assert!(html.contains("<h2>Folio</h2>"));
        assert!(html.contains("Technologies: Rust, SQL"));
        assert!(html.contains("View code"));
        assert!(html.contains("alt=\"Folio - Image 1\""));
        assert!(!html.contains("Watch demo"));
    }

    #[test]
    fn test_stand_in_detail_is_minimal() {
        let stand_in = Project {
            id: String::new(),
            title: "Stand-in".into(),
            description: String::new(),
            technologies: vec![],
            code_link: String::new(),
            images: vec![],
            video: None,
        };
        let html = stand_in.detail(&RenderContext::default());
        assert_eq!(html, "<div class=\"detail\"><h2>Stand-in</h2></div>");
    }

    #[test]
    fn test_next_button_only_with_several_projects() {
        let heading = Heading {
            title: "Projects",
            subtitle: "",
        };
        let ctx = RenderContext::default();

        let single = SectionState::ready(vec![project("One")]);
        assert!(!render_section(heading, &single, &ctx).contains("Next project"));

        let mut several = SectionState::ready(vec![project("One"), project("Two")]);
        several.select_next();
        let html = render_section(heading, &several, &ctx);
        assert!(html.contains("Next project"));
        assert!(html.contains("id=\"product\""));
        assert!(html.contains("<div class=\"detail\"><h2>Two</h2>"));
    }
}
