//! The seam between a [`ListStore`](crate::ListStore) and the HTTP client.

use async_trait::async_trait;
use deck_client::{ApiClient, ClientError};
use deck_core::entities::{Comment, Identified, Task};
use deck_core::filters::TaskFilters;
use deck_core::validation::{CommentDraft, CommentInput, TaskDraft, TaskInput, Validate};
use deck_core::{Page, PageParams};

/// A paginated server-side collection with create/update/delete.
#[async_trait]
pub trait Resource: Send + Sync {
    type Item: Identified + Clone + Send + Sync;
    type Draft: Validate<Output = Self::Input> + Send + Sync;
    type Input: Send + Sync;
    type Filters: Clone + Default + Send + Sync;

    /// Singular noun used in prompts and error messages.
    const NOUN: &'static str;

    async fn fetch(
        &self,
        params: PageParams,
        filters: &Self::Filters,
    ) -> Result<Page<Self::Item>, ClientError>;

    async fn create(&self, input: &Self::Input) -> Result<Self::Item, ClientError>;

    async fn update(&self, id: &str, input: &Self::Input) -> Result<Self::Item, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

/// The account's tasks.
#[derive(Clone)]
pub struct TaskResource {
    client: ApiClient,
}

impl TaskResource {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for TaskResource {
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
        self.client.list_tasks(params, filters).await
    }

    async fn create(&self, input: &TaskInput) -> Result<Task, ClientError> {
        self.client.create_task(input).await
    }

    async fn update(&self, id: &str, input: &TaskInput) -> Result<Task, ClientError> {
        self.client.update_task(id, input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete_task(id).await
    }
}

/// Comments of one task.
#[derive(Clone)]
pub struct CommentResource {
    client: ApiClient,
    task_id: String,
}

impl CommentResource {
    #[must_use]
    pub fn new(client: ApiClient, task_id: impl Into<String>) -> Self {
        Self {
            client,
            task_id: task_id.into(),
        }
    }

    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

#[async_trait]
impl Resource for CommentResource {
    type Item = Comment;
    type Draft = CommentDraft;
    type Input = CommentInput;
    type Filters = ();

    const NOUN: &'static str = "comment";

    async fn fetch(&self, params: PageParams, _filters: &()) -> Result<Page<Comment>, ClientError> {
        self.client.list_comments(&self.task_id, params).await
    }

    async fn create(&self, input: &CommentInput) -> Result<Comment, ClientError> {
        self.client.create_comment(&self.task_id, input).await
    }

    async fn update(&self, id: &str, input: &CommentInput) -> Result<Comment, ClientError> {
        self.client.update_comment(&self.task_id, id, input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete_comment(&self.task_id, id).await
    }
}
