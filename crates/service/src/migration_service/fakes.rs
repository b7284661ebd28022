//! In-memory stores for pipeline unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use typo2wp_core::{
    Article, Category, Comment, CommentRecord, Page, PostMeta, PostRecord, PostType, Tag,
    Taxonomy, TextFilter, Trackback, parse_timestamp,
};
use typo2wp_storage::StorageError;
use typo2wp_storage::traits::{CommentStore, PostStore, SchemaStore, TermStore, TypoStore};

use crate::prompt::OverwritePrompt;

#[derive(Default)]
pub struct FakeTypo {
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub text_filters: Vec<TextFilter>,
    pub pages: Vec<Page>,
    pub articles: Vec<Article>,
    /// `(article_id, category_id)`
    pub categorizations: Vec<(i64, i64)>,
    /// `(article_id, tag_id)`
    pub article_tags: Vec<(i64, i64)>,
    pub comments: Vec<Comment>,
    pub trackbacks: Vec<Trackback>,
}

#[async_trait]
impl TypoStore for FakeTypo {
    async fn categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.categories.clone())
    }

    async fn tags(&self) -> Result<Vec<Tag>, StorageError> {
        Ok(self.tags.clone())
    }

    async fn text_filters(&self) -> Result<Vec<TextFilter>, StorageError> {
        Ok(self.text_filters.clone())
    }

    async fn pages(&self) -> Result<Vec<Page>, StorageError> {
        Ok(self.pages.clone())
    }

    async fn articles(&self) -> Result<Vec<Article>, StorageError> {
        Ok(self.articles.clone())
    }

    async fn article_category_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError> {
        Ok(linked(&self.categorizations, article_id))
    }

    async fn article_tag_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError> {
        Ok(linked(&self.article_tags, article_id))
    }

    async fn comments(&self) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments.clone())
    }

    async fn trackbacks(&self) -> Result<Vec<Trackback>, StorageError> {
        Ok(self.trackbacks.clone())
    }
}

fn linked(pairs: &[(i64, i64)], article_id: i64) -> Vec<i64> {
    pairs.iter().filter(|(a, _)| *a == article_id).map(|(_, t)| *t).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTermTaxonomy {
    pub id: i64,
    pub term_id: i64,
    pub taxonomy: Taxonomy,
    pub count: i64,
}

#[derive(Debug, Clone)]
pub struct StoredPost {
    pub id: i64,
    pub record: PostRecord,
}

#[derive(Default)]
pub struct WpState {
    next_id: i64,
    pub has_schema: bool,
    /// `(term_id, name, slug)`
    pub terms: Vec<(i64, String, String)>,
    pub term_taxonomy: Vec<StoredTermTaxonomy>,
    /// `(object_id, term_taxonomy_id)`
    pub relationships: Vec<(i64, i64)>,
    pub posts: Vec<StoredPost>,
    /// `(post_id, meta)`
    pub post_meta: Vec<(i64, PostMeta)>,
    pub comments: Vec<CommentRecord>,
}

impl WpState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub struct FakeWordPress {
    pub state: Mutex<WpState>,
}

impl FakeWordPress {
    pub fn new() -> Self {
        Self { state: Mutex::new(WpState { has_schema: true, ..WpState::default() }) }
    }

    pub fn without_schema() -> Self {
        Self { state: Mutex::new(WpState::default()) }
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, WpState> {
        self.state.lock().unwrap()
    }

    /// Seed an existing post, as if left over from an earlier run.
    pub fn seed_post(&self, record: PostRecord) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        state.posts.push(StoredPost { id, record });
        id
    }
}

#[async_trait]
impl SchemaStore for FakeWordPress {
    fn terms_table(&self) -> String {
        "wp_terms".to_owned()
    }

    async fn has_terms_table(&self) -> Result<bool, StorageError> {
        Ok(self.state().has_schema)
    }
}

#[async_trait]
impl TermStore for FakeWordPress {
    async fn find_term(&self, slug: &str) -> Result<Option<i64>, StorageError> {
        Ok(self.state().terms.iter().find(|(_, _, s)| s == slug).map(|(id, _, _)| *id))
    }

    async fn insert_term(&self, name: &str, slug: &str) -> Result<i64, StorageError> {
        let mut state = self.state();
        let id = state.next_id();
        state.terms.push((id, name.to_owned(), slug.to_owned()));
        Ok(id)
    }

    async fn find_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<Option<i64>, StorageError> {
        Ok(self
            .state()
            .term_taxonomy
            .iter()
            .find(|tt| tt.term_id == term_id && tt.taxonomy == taxonomy)
            .map(|tt| tt.id))
    }

    async fn insert_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<i64, StorageError> {
        let mut state = self.state();
        let id = state.next_id();
        state.term_taxonomy.push(StoredTermTaxonomy { id, term_id, taxonomy, count: 0 });
        Ok(id)
    }

    async fn relationship_exists(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<bool, StorageError> {
        Ok(self.state().relationships.contains(&(object_id, term_taxonomy_id)))
    }

    async fn insert_relationship(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<(), StorageError> {
        self.state().relationships.push((object_id, term_taxonomy_id));
        Ok(())
    }

    async fn increment_term_count(&self, term_taxonomy_id: i64) -> Result<(), StorageError> {
        let mut state = self.state();
        if let Some(tt) = state.term_taxonomy.iter_mut().find(|tt| tt.id == term_taxonomy_id) {
            tt.count += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for FakeWordPress {
    async fn find_posts(
        &self,
        post_name: &str,
        post_type: PostType,
    ) -> Result<Vec<i64>, StorageError> {
        Ok(self
            .state()
            .posts
            .iter()
            .filter(|p| p.record.post_name == post_name && p.record.post_type == post_type)
            .map(|p| p.id)
            .collect())
    }

    async fn insert_post(&self, post: &PostRecord) -> Result<i64, StorageError> {
        Ok(self.seed_post(post.clone()))
    }

    async fn update_post(&self, post_id: i64, post: &PostRecord) -> Result<(), StorageError> {
        let mut state = self.state();
        if let Some(stored) = state.posts.iter_mut().find(|p| p.id == post_id) {
            let post_date = post.post_date.or(stored.record.post_date);
            stored.record = PostRecord { post_date, ..post.clone() };
        }
        Ok(())
    }

    async fn delete_post_meta(&self, post_id: i64) -> Result<u64, StorageError> {
        let mut state = self.state();
        let before = state.post_meta.len();
        state.post_meta.retain(|(id, _)| *id != post_id);
        Ok((before - state.post_meta.len()) as u64)
    }

    async fn insert_post_meta(&self, post_id: i64, meta: &PostMeta) -> Result<(), StorageError> {
        self.state().post_meta.push((post_id, meta.clone()));
        Ok(())
    }
}

#[async_trait]
impl CommentStore for FakeWordPress {
    async fn insert_comment(&self, comment: &CommentRecord) -> Result<i64, StorageError> {
        let mut state = self.state();
        let id = state.next_id();
        state.comments.push(comment.clone());
        Ok(id)
    }
}

/// Replays canned answers and records every question asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self { answers: answers.iter().copied().collect(), asked: Vec::new() }
    }
}

impl OverwritePrompt for &mut ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer"))
    }
}

pub fn ts(value: &str) -> NaiveDateTime {
    parse_timestamp(value).unwrap()
}
