//! Rows read from the Typo schema.

use chrono::NaiveDateTime;

/// `contents.type` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Page,
    Article,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::Article => "Article",
        }
    }
}

/// `feedback.type` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Comment,
    Trackback,
}

impl FeedbackKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "Comment",
            Self::Trackback => "Trackback",
        }
    }
}

/// Interpret a Typo boolean column read as text.
///
/// Rails adapters store booleans as `1`, `t` or `true` depending on the
/// database. Anything else, NULL included, is false.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "t" | "true" | "TRUE"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub permalink: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    /// Slug.
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    pub id: i64,
    pub markup: String,
    /// Serialized filter list, e.g. `"--- \n- :smartypants\n"`.
    pub filters: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub name: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub extended: Option<String>,
    pub excerpt: Option<String>,
    pub permalink: String,
    pub guid: Option<String>,
    pub text_filter_id: Option<i64>,
    pub published: bool,
    pub published_at: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
    pub allow_comments: bool,
    pub allow_pings: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub article_id: Option<i64>,
    pub author: String,
    pub body: String,
    pub email: Option<String>,
    pub url: Option<String>,
    pub ip: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trackback {
    pub id: i64,
    pub article_id: Option<i64>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub blog_name: String,
    pub url: Option<String>,
    pub ip: Option<String>,
    pub created_at: NaiveDateTime,
}
