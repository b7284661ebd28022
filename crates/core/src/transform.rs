//! Typo row → WordPress row conversions.

use crate::constants::{
    MORE_SEPARATOR, PAGE_TEMPLATE_META_KEY, PAGE_TEMPLATE_META_VALUE, POST_ENCODING_META_KEY,
    POST_FORMAT_META_KEY,
};
use crate::source::{Article, Comment, Page, Trackback};
use crate::target::{
    CommentRecord, CommentType, OpenStatus, PostMeta, PostRecord, PostStatus, PostType,
};
use crate::text_filter::TextFormat;
use crate::timestamp::DatePair;

/// Join an article body with its extended section.
#[must_use]
pub fn article_content(body: &str, extended: Option<&str>) -> String {
    match extended {
        Some(ext) if !ext.trim().is_empty() => format!("{body}{MORE_SEPARATOR}{ext}"),
        _ => body.to_owned(),
    }
}

#[must_use]
pub fn page_record(page: &Page, post_author: i64) -> PostRecord {
    PostRecord {
        post_type: PostType::Page,
        post_author,
        post_name: page.name.clone(),
        post_title: page.title.clone(),
        post_content: page.body.clone(),
        post_excerpt: String::new(),
        post_status: PostStatus::from_published(page.published),
        post_date: Some(DatePair::from_local(page.created_at)),
        post_modified: DatePair::from_local(page.updated_at),
        comment_status: None,
        ping_status: None,
        guid: None,
    }
}

#[must_use]
pub fn page_meta() -> Vec<PostMeta> {
    vec![PostMeta::new(PAGE_TEMPLATE_META_KEY, PAGE_TEMPLATE_META_VALUE)]
}

/// Unpublished articles keep whatever `post_date` the destination has.
#[must_use]
pub fn article_record(article: &Article, post_author: i64) -> PostRecord {
    let post_date =
        if article.published { article.published_at.map(DatePair::from_local) } else { None };
    PostRecord {
        post_type: PostType::Post,
        post_author,
        post_name: article.permalink.clone(),
        post_title: article.title.clone(),
        post_content: article_content(&article.body, article.extended.as_deref()),
        post_excerpt: article.excerpt.clone().unwrap_or_default(),
        post_status: PostStatus::from_published(article.published),
        post_date,
        post_modified: DatePair::from_local(article.updated_at),
        comment_status: Some(OpenStatus::from_flag(article.allow_comments)),
        ping_status: Some(OpenStatus::from_flag(article.allow_pings)),
        guid: article.guid.clone(),
    }
}

#[must_use]
pub fn article_meta(format: &TextFormat) -> Vec<PostMeta> {
    vec![
        PostMeta::new(POST_FORMAT_META_KEY, format.markup.clone()),
        PostMeta::new(POST_ENCODING_META_KEY, format.filter.clone()),
    ]
}

#[must_use]
pub fn comment_record(comment: &Comment, post_id: Option<i64>) -> CommentRecord {
    CommentRecord {
        post_id,
        author: comment.author.clone(),
        author_email: comment.email.clone().unwrap_or_default(),
        author_url: comment.url.clone().unwrap_or_default(),
        author_ip: comment.ip.clone().unwrap_or_default(),
        date: DatePair::from_local(comment.created_at),
        content: comment.body.clone(),
        user_id: comment.user_id.unwrap_or(0),
        comment_type: CommentType::Comment,
    }
}

#[must_use]
pub fn trackback_record(trackback: &Trackback, post_id: Option<i64>) -> CommentRecord {
    CommentRecord {
        post_id,
        author: trackback.blog_name.clone(),
        author_email: String::new(),
        author_url: trackback.url.clone().unwrap_or_default(),
        author_ip: trackback.ip.clone().unwrap_or_default(),
        date: DatePair::from_local(trackback.created_at),
        content: trackback.excerpt.clone().unwrap_or_default(),
        user_id: 0,
        comment_type: CommentType::Trackback,
    }
}
