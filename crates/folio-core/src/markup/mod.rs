//! HTML fragments for portfolio sections.
//!
//! Every section renders through [`render_section`], which turns a
//! [`SectionView`] into markup; records only supply their card and detail
//! panel via [`RecordMarkup`]. All interpolated text is escaped.

mod certificate;
mod education;
mod project;

pub use education::render_education;

use crate::content::SectionContent;
use crate::models::Record;
use crate::section::SectionState;
use crate::traits::DEFAULT_PLACEHOLDER_IMAGE;
use crate::view::SectionView;

/// Settings shared by every rendered fragment.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Image substituted when a record image fails to load.
    pub placeholder_image: &'a str,
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE,
        }
    }
}

/// Section title and subtitle.
#[derive(Debug, Clone, Copy)]
pub struct Heading<'a> {
    /// Title text.
    pub title: &'a str,
    /// Subtitle text.
    pub subtitle: &'a str,
}

impl<'a, T> From<&'a SectionContent<T>> for Heading<'a> {
    fn from(content: &'a SectionContent<T>) -> Self {
        Self {
            title: &content.title,
            subtitle: &content.subtitle,
        }
    }
}

/// Per-record pieces of a section's markup.
pub trait RecordMarkup: Record {
    /// `id` attribute of the section element.
    const SECTION_ID: &'static str;

    /// Selectable card shown in the grid.
    fn card(&self, index: usize, selected: bool) -> String;

    /// Detail panel for the selected record.
    fn detail(&self, ctx: &RenderContext<'_>) -> String;

    /// Controls rendered after the detail panel.
    fn footer(_items: &[Self], _selected: Option<usize>) -> String {
        String::new()
    }
}

/// Render a fetched section for its current state.
pub fn render_section<T: RecordMarkup>(
    heading: Heading<'_>,
    state: &SectionState<T>,
    ctx: &RenderContext<'_>,
) -> String {
    let view = SectionView::of(state);
    let warning = match &view {
        SectionView::Populated { warning, .. } => *warning,
        _ => None,
    };

    let mut html = open_section(T::SECTION_ID, heading, warning);
    match view {
        SectionView::Loading => html.push_str(&loading_panel(T::NOUN)),
        SectionView::Failed { message } => html.push_str(&error_panel(T::NOUN, message)),
        SectionView::Empty => html.push_str(&empty_panel(T::NOUN)),
        SectionView::Populated {
            items,
            selected,
            detail,
            ..
        } => {
            html.push_str("<div class=\"card-grid\">");
            for (index, item) in items.iter().enumerate() {
                html.push_str(&item.card(index, selected == Some(index)));
            }
            html.push_str("</div>");
            if let Some(item) = detail {
                html.push_str(&item.detail(ctx));
            }
            html.push_str(&T::footer(items, selected));
        }
    }
    html.push_str("</section>");
    html
}

fn open_section(id: &str, heading: Heading<'_>, warning: Option<&str>) -> String {
    let mut html = format!(
        "<section class=\"folio-section\" id=\"{}\"><header class=\"section-heading\">\
         <h1>{}</h1><hr class=\"divider\"><p class=\"subtitle\">{}</p>",
        escape(id),
        escape(heading.title),
        escape(heading.subtitle),
    );
    if let Some(message) = warning {
        html.push_str(&format!(
            "<div class=\"fallback-banner\" role=\"status\"><p>⚠️ Using fallback data: {}</p></div>",
            escape(message)
        ));
    }
    html.push_str("</header>");
    html
}

fn loading_panel(noun: &str) -> String {
    format!(
        "<div class=\"loading\" aria-busy=\"true\"><div class=\"spinner\"></div>\
         <span>Loading {}...</span></div>",
        escape(noun)
    )
}

fn error_panel(noun: &str, message: &str) -> String {
    format!(
        "<div class=\"error-panel\" role=\"alert\"><h3>Failed to load {}</h3><p>{}</p>\
         <button type=\"button\" onclick=\"window.location.reload()\">Try Again</button></div>",
        escape(noun),
        escape(message)
    )
}

fn empty_panel(noun: &str) -> String {
    format!(
        "<div class=\"empty-state\"><h3>No {noun} found</h3>\
         <p>No {noun} are available at the moment.</p></div>",
        noun = escape(noun)
    )
}

/// Image with a placeholder swapped in when loading fails.
pub(crate) fn image(src: &str, alt: &str, ctx: &RenderContext<'_>) -> String {
    let fallback = format!(
        "this.onerror=null;this.src='{}'",
        js_string(ctx.placeholder_image)
    );
    format!(
        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" onerror=\"{}\">",
        escape(src),
        escape(alt),
        escape(&fallback)
    )
}

/// Link opened in a new browsing context.
pub(crate) fn external_link(href: &str, label: &str) -> String {
    format!(
        "<a class=\"external-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(label)
    )
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
