//! View model for the home page and the step that turns it into HTML.
//!
//! [`HomeView::build`] is pure: it takes data already fetched from the store
//! and never touches I/O, so it can be checked without rendering anything.

use askama::Template;
use url::Url;

use crate::models::{Entry, Feeling};

const TIMESTAMP_FORMAT: &str = "%b %d, %Y • %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub content: String,
    pub feeling: String,
    pub posted_at: String,
}

impl From<Entry> for EntryView {
    fn from(entry: Entry) -> Self {
        let posted_at = match entry.created_at() {
            Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
            None => entry.timestamp,
        };
        Self {
            content: entry.content,
            feeling: entry.feeling,
            posted_at,
        }
    }
}

/// One button in the filter bar. Feelings that cannot be addressed as a
/// path segment are shown without a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLink {
    pub feeling: String,
    pub href: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub entries: Vec<EntryView>,
    pub feelings: Vec<&'static str>,
    pub filters: Vec<FilterLink>,
    pub current_feeling: Option<String>,
}

impl HomeView {
    pub fn build(
        entries: Vec<Entry>,
        distinct_feelings: Vec<String>,
        current_feeling: Option<String>,
    ) -> Self {
        let filters = distinct_feelings
            .into_iter()
            .map(|feeling| FilterLink {
                href: filter_href(&feeling),
                active: current_feeling.as_deref() == Some(feeling.as_str()),
                feeling,
            })
            .collect();

        Self {
            entries: entries.into_iter().map(EntryView::from).collect(),
            feelings: Feeling::ALL.iter().map(Feeling::as_str).collect(),
            filters,
            current_feeling,
        }
    }

    pub fn title(&self) -> String {
        match &self.current_feeling {
            Some(feeling) => format!("{feeling} · Lost & Found Universe"),
            None => "Lost & Found Universe".to_string(),
        }
    }

    /// Whether the "all" link is the active one.
    pub fn unfiltered(&self) -> bool {
        self.current_feeling.is_none()
    }
}

/// Path of the filtered listing for `feeling`, percent-encoded as a single
/// path segment. `None` for `.` and `..`, which URL resolution collapses
/// even when percent-encoded.
pub fn filter_href(feeling: &str) -> Option<String> {
    if feeling == "." || feeling == ".." {
        return None;
    }
    let Ok(mut url) = Url::parse("http://localhost/filter") else {
        return Some(format!("/filter/{feeling}"));
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(feeling);
    }
    Some(url.path().to_string())
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    view: &'a HomeView,
    static_hash: &'static str,
}

pub fn render(view: &HomeView) -> Result<String, askama::Error> {
    HomeTemplate {
        view,
        static_hash: crate::STATIC_HASH,
    }
    .render()
}
