//! In-memory stand-ins for the task and comment endpoints.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use deck_client::ClientError;
use deck_core::entities::{Comment, Identified, Task};
use deck_core::filters::TaskFilters;
use deck_core::page::total_pages;
use deck_core::validation::{CommentDraft, CommentInput, TaskDraft, TaskInput};
use deck_core::{Page, PageParams};
use deck_sync::Resource;
use parking_lot::Mutex;
use tokio::sync::Notify;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    pub fetch: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

struct State<T> {
    /// Newest first, like the real list endpoints.
    items: Vec<T>,
    next_id: usize,
    calls: Calls,
    fail_next: Option<ClientError>,
    held_fetches: usize,
}

/// Shared server state. Clones talk to the same collection.
pub struct Backend<T> {
    state: Arc<Mutex<State<T>>>,
    release: Arc<Notify>,
}

impl<T> Clone for Backend<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            release: Arc::clone(&self.release),
        }
    }
}

impl<T: Identified + Clone> Backend<T> {
    pub fn new(items: Vec<T>) -> Self {
        let next_id = items.len() + 1;
        Self {
            state: Arc::new(Mutex::new(State {
                items,
                next_id,
                calls: Calls::default(),
                fail_next: None,
                held_fetches: 0,
            })),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn calls(&self) -> Calls {
        self.state.lock().calls
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.state
            .lock()
            .items
            .iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    /// Insert directly, bypassing the API.
    pub fn push_front(&self, item: T) {
        self.state.lock().items.insert(0, item);
    }

    /// Fail the next request of any kind with `error`.
    pub fn fail_next(&self, error: ClientError) {
        self.state.lock().fail_next = Some(error);
    }

    /// Park the next `count` fetches after they read the collection, until
    /// [`Self::release`] is called once per fetch.
    pub fn hold_fetches(&self, count: usize) {
        self.state.lock().held_fetches = count;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Yield until `count` fetches have been issued.
    pub async fn wait_for_fetches(&self, count: usize) {
        while self.calls().fetch < count {
            tokio::task::yield_now().await;
        }
    }

    async fn fetch_where(
        &self,
        params: PageParams,
        keep: impl Fn(&T) -> bool,
    ) -> Result<Page<T>, ClientError> {
        let (page, held) = {
            let mut state = self.state.lock();
            state.calls.fetch += 1;
            if let Some(error) = state.fail_next.take() {
                return Err(error);
            }
            let matching: Vec<T> = state.items.iter().filter(|item| keep(*item)).cloned().collect();
            let total_count = matching.len() as u64;
            let offset = usize::try_from(params.offset()).unwrap();
            let items = matching
                .into_iter()
                .skip(offset)
                .take(params.size as usize)
                .collect();
            let held = state.held_fetches > 0;
            if held {
                state.held_fetches -= 1;
            }
            let page = Page {
                items,
                total_count,
                total_pages: total_pages(total_count, params.size),
                page: params.page,
                size: params.size,
            };
            (page, held)
        };
        if held {
            self.release.notified().await;
        }
        Ok(page)
    }

    fn insert(&self, build: impl FnOnce(String) -> T) -> Result<T, ClientError> {
        let mut state = self.state.lock();
        state.calls.create += 1;
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        let id = format!("new-{}", state.next_id);
        state.next_id += 1;
        let item = build(id);
        state.items.insert(0, item.clone());
        Ok(item)
    }

    fn modify(&self, id: &str, apply: impl FnOnce(&mut T)) -> Result<T, ClientError> {
        let mut state = self.state.lock();
        state.calls.update += 1;
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(not_found)?;
        apply(item);
        Ok(item.clone())
    }

    fn remove(&self, id: &str) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        state.calls.delete += 1;
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        if state.items.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

fn not_found() -> ClientError {
    ClientError::Api {
        status: 404,
        code: Some("NOT_FOUND".into()),
        message: "not found".into(),
    }
}

pub fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        code: None,
        message: "Internal Server Error".into(),
    }
}

pub fn task(id: impl Into<String>, title: &str) -> Task {
    Task {
        id: id.into(),
        account_id: "acct-1".into(),
        title: title.into(),
        description: String::new(),
        active: true,
        created_at: None,
        updated_at: None,
    }
}

/// `count` tasks with ids `t1..=t{count}`, newest first.
pub fn tasks(count: usize) -> Vec<Task> {
    (1..=count)
        .rev()
        .map(|n| task(format!("t{n}"), &format!("Task {n}")))
        .collect()
}

pub fn comment(id: impl Into<String>, content: &str) -> Comment {
    Comment {
        id: id.into(),
        task_id: "t1".into(),
        account_id: "acct-1".into(),
        content: content.into(),
        active: true,
        created_at: None,
        updated_at: None,
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct FakeTasks(pub Backend<Task>);

#[async_trait]
impl Resource for FakeTasks {
    type Item = Task;
    type Draft = TaskDraft;
    type Input = TaskInput;
    type Filters = TaskFilters;

    const NOUN: &'static str = "task";

    async fn fetch(
        &self,
        params: PageParams,
        filters: &TaskFilters,
    ) -> Result<Page<Task>, ClientError> {
        let search = filters.search.clone().unwrap_or_default().to_lowercase();
        self.0
            .fetch_where(params, |task| task.title.to_lowercase().contains(&search))
            .await
    }

    async fn create(&self, input: &TaskInput) -> Result<Task, ClientError> {
        self.0.insert(|id| Task {
            description: input.description().to_string(),
            ..task(id, input.title())
        })
    }

    async fn update(&self, id: &str, input: &TaskInput) -> Result<Task, ClientError> {
        self.0.modify(id, |task| {
            task.title = input.title().to_string();
            task.description = input.description().to_string();
        })
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.0.remove(id)
    }
}

#[derive(Clone)]
pub struct FakeComments(pub Backend<Comment>);

#[async_trait]
impl Resource for FakeComments {
    type Item = Comment;
    type Draft = CommentDraft;
    type Input = CommentInput;
    type Filters = ();

    const NOUN: &'static str = "comment";

    async fn fetch(&self, params: PageParams, _filters: &()) -> Result<Page<Comment>, ClientError> {
        self.0.fetch_where(params, |_| true).await
    }

    async fn create(&self, input: &CommentInput) -> Result<Comment, ClientError> {
        self.0.insert(|id| comment(id, input.content()))
    }

    async fn update(&self, id: &str, input: &CommentInput) -> Result<Comment, ClientError> {
        self.0
            .modify(id, |comment| comment.content = input.content().to_string())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.0.remove(id)
    }
}
