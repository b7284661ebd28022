//! Rows written to the WordPress schema.

use crate::timestamp::DatePair;

/// `term_taxonomy.taxonomy` values used by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    Category,
    PostTag,
}

impl Taxonomy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::PostTag => "post_tag",
        }
    }
}

/// `posts.post_type` values used by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostType {
    Page,
    Post,
}

impl PostType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
        }
    }

    /// Human label used in prompts and diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "article",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Publish,
    Draft,
}

impl PostStatus {
    #[must_use]
    pub const fn from_published(published: bool) -> Self {
        if published { Self::Publish } else { Self::Draft }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
        }
    }
}

/// `comment_status` / `ping_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open,
    Closed,
}

impl OpenStatus {
    #[must_use]
    pub const fn from_flag(allowed: bool) -> Self {
        if allowed { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Column values for a `posts` row, shared by insert and update.
///
/// `None` fields are left out of the statement so the database default (on
/// insert) or the existing value (on update) is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub post_type: PostType,
    pub post_author: i64,
    pub post_name: String,
    pub post_title: String,
    pub post_content: String,
    pub post_excerpt: String,
    pub post_status: PostStatus,
    pub post_date: Option<DatePair>,
    pub post_modified: DatePair,
    pub comment_status: Option<OpenStatus>,
    pub ping_status: Option<OpenStatus>,
    pub guid: Option<String>,
}

/// Extra `postmeta` entry attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub meta_key: &'static str,
    pub meta_value: String,
}

impl PostMeta {
    #[must_use]
    pub fn new(meta_key: &'static str, meta_value: impl Into<String>) -> Self {
        Self { meta_key, meta_value: meta_value.into() }
    }
}

/// `comments.comment_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentType {
    /// Regular comment, stored with an empty `comment_type`.
    Comment,
    Trackback,
}

impl CommentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "",
            Self::Trackback => "trackback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    /// `None` when the article was skipped or never migrated.
    pub post_id: Option<i64>,
    pub author: String,
    pub author_email: String,
    pub author_url: String,
    pub author_ip: String,
    pub date: DatePair,
    pub content: String,
    pub user_id: i64,
    pub comment_type: CommentType,
}
