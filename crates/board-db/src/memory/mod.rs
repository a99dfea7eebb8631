//! In-memory store
//!
//! Implements every repository port without a database. Each unit of work
//! reads from a private snapshot, records its post writes, and replays them
//! onto the shared tables on commit. Rollback or drop throws the log away.
//!
//! A commit whose updates or deletes target a post that another unit of work
//! already removed fails with `PostNotFound` and applies nothing.
//!
//! Post ids come from a shared counter and are never reused, even when the
//! unit of work that allocated them rolls back.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, warn};

use board_core::entities::{Category, NewPost, Part, Post, User};
use board_core::error::DomainError;
use board_core::traits::{
    CategoryRepository, PartRepository, PostRepository, RepoResult, UnitOfWork,
    UnitOfWorkFactory, UserRepository,
};
use board_core::value_objects::{CategoryId, Page, PageRequest, PartId, PostId, UserId};

#[derive(Debug, Clone, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    categories: BTreeMap<CategoryId, Category>,
    parts: BTreeMap<PartId, Part>,
    posts: BTreeMap<PostId, Post>,
}

#[derive(Debug)]
enum PostWrite {
    Insert(Post),
    Update(Post),
    Remove(PostId),
}

impl PostWrite {
    /// Id of the committed row this write expects to find
    fn existing_target(&self) -> Option<PostId> {
        match self {
            Self::Insert(_) => None,
            Self::Update(post) => Some(post.id),
            Self::Remove(id) => Some(*id),
        }
    }
}

/// Shared in-memory tables
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    next_post_id: Arc<AtomicI64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            next_post_id: Arc::new(AtomicI64::new(1)),
        }
    }

    // === Seeding ===

    pub fn add_user(&self, user: User) {
        self.tables.lock().users.insert(user.id, user);
    }

    pub fn add_category(&self, category: Category) {
        self.tables.lock().categories.insert(category.id, category);
    }

    pub fn add_part(&self, part: Part) {
        self.tables.lock().parts.insert(part.id, part);
    }

    pub fn remove_user(&self, id: UserId) -> Option<User> {
        self.tables.lock().users.remove(&id)
    }

    // === Inspection ===

    /// Committed state of a post
    pub fn post(&self, id: PostId) -> Option<Post> {
        self.tables.lock().posts.get(&id).cloned()
    }

    /// Number of committed posts
    pub fn post_count(&self) -> usize {
        self.tables.lock().posts.len()
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let snapshot = self.tables.lock().clone();
        Ok(Box::new(InMemoryUnitOfWork {
            store: self.clone(),
            snapshot,
            writes: Vec::new(),
        }))
    }
}

/// Unit of work over an `InMemoryStore`
pub struct InMemoryUnitOfWork {
    store: InMemoryStore,
    snapshot: Tables,
    writes: Vec<PostWrite>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn users(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn categories(&mut self) -> &mut dyn CategoryRepository {
        self
    }

    fn parts(&mut self) -> &mut dyn PartRepository {
        self
    }

    fn posts(&mut self) -> &mut dyn PostRepository {
        self
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self { store, writes, .. } = *self;
        let applied = writes.len();
        {
            let mut tables = store.tables.lock();

            // Posts inserted by this unit count as present for its later writes
            let inserted: HashSet<PostId> = writes
                .iter()
                .filter_map(|write| match write {
                    PostWrite::Insert(post) => Some(post.id),
                    _ => None,
                })
                .collect();
            if let Some(id) = writes
                .iter()
                .filter_map(PostWrite::existing_target)
                .find(|id| !tables.posts.contains_key(id) && !inserted.contains(id))
            {
                warn!(post_id = %id, "Commit rejected: post removed by another unit of work");
                return Err(DomainError::PostNotFound(id));
            }

            for write in writes {
                match write {
                    PostWrite::Insert(post) | PostWrite::Update(post) => {
                        tables.posts.insert(post.id, post);
                    }
                    PostWrite::Remove(id) => {
                        tables.posts.remove(&id);
                    }
                }
            }
        }
        debug!(applied, "In-memory unit of work committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        debug!(discarded = self.writes.len(), "In-memory unit of work rolled back");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.snapshot.users.get(&id).cloned())
    }

    async fn find_by_ids(&mut self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.snapshot.users.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.snapshot.categories.get(&id).cloned())
    }
}

#[async_trait]
impl PartRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: PartId) -> RepoResult<Option<Part>> {
        Ok(self.snapshot.parts.get(&id).cloned())
    }

    async fn find_by_ids(&mut self, ids: &[PartId]) -> RepoResult<Vec<Part>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.snapshot.parts.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryUnitOfWork {
    async fn find_by_id(&mut self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.snapshot.posts.get(&id).cloned())
    }

    async fn insert(&mut self, post: &NewPost) -> RepoResult<Post> {
        let id = PostId::new(self.store.next_post_id.fetch_add(1, Ordering::SeqCst));
        let post = post.clone().into_post(id, Utc::now());

        self.snapshot.posts.insert(id, post.clone());
        self.writes.push(PostWrite::Insert(post.clone()));
        Ok(post)
    }

    async fn update(&mut self, post: &Post) -> RepoResult<Post> {
        let stored = self
            .snapshot
            .posts
            .get_mut(&post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;

        // The writer and creation time are fixed at insert
        let updated = Post {
            writer_id: stored.writer_id,
            created_at: stored.created_at,
            ..post.clone()
        };
        *stored = updated.clone();
        self.writes.push(PostWrite::Update(updated.clone()));
        Ok(updated)
    }

    async fn delete(&mut self, post: &Post) -> RepoResult<()> {
        if self.snapshot.posts.remove(&post.id).is_none() {
            return Err(DomainError::PostNotFound(post.id));
        }
        self.writes.push(PostWrite::Remove(post.id));
        Ok(())
    }

    async fn find_by_category(
        &mut self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<Page<Post>> {
        let mut matching: Vec<&Post> = self
            .snapshot
            .posts
            .values()
            .filter(|post| post.category_id == category_id)
            .collect();
        matching.sort_by_key(|post| (post.created_at, post.id));

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, total))
    }
}
