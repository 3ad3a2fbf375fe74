use super::{RecordMarkup, RenderContext, escape, external_link, image};
use crate::format::{long_date, short_date};
use crate::models::Certificate;

impl RecordMarkup for Certificate {
    const SECTION_ID: &'static str = "certifs";

    fn card(&self, index: usize, selected: bool) -> String {
        format!(
            "<article class=\"card{}\" data-index=\"{index}\" aria-selected=\"{selected}\">\
             <h3>{}</h3><p class=\"organization\">{}</p><p class=\"date\">{}</p></article>",
            if selected { " selected" } else { "" },
            escape(&self.title),
            escape(&self.organization),
            escape(&short_date(&self.obtained_on)),
        )
    }

    fn detail(&self, ctx: &RenderContext<'_>) -> String {
        let mut html = format!(
            "<div class=\"detail\"><h2>{}</h2><p class=\"organization\">{}</p><p class=\"date\">{}</p>",
            escape(&self.title),
            escape(&self.organization),
            escape(&long_date(&self.obtained_on)),
        );

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            html.push_str(&format!(
                "<p class=\"description\">{}</p>",
                escape(description)
            ));
        }

        if !self.skills().is_empty() {
            html.push_str("<div class=\"skills\"><h4>Skills &amp; Technologies</h4>");
            for skill in self.skills() {
                html.push_str(&format!("<span class=\"tag\">{}</span>", escape(skill)));
            }
            html.push_str("</div>");
        }

        if !self.images.is_empty() {
            html.push_str("<div class=\"images\">");
            for (idx, src) in self.images.iter().enumerate() {
                let alt = format!("{} - certificate {}", self.title, idx + 1);
                html.push_str(&image(src, &alt, ctx));
            }
            html.push_str("</div>");
        }

        if let Some(link) = self.link() {
            html.push_str(&external_link(link, "View Certificate Details"));
        }

        html.push_str("</div>");
        html
    }
}
