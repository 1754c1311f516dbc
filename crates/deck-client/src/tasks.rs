//! Task endpoints.

use deck_core::entities::Task;
use deck_core::filters::TaskFilters;
use deck_core::page::{Page, PageParams};
use deck_core::validation::TaskInput;
use reqwest::{Method, RequestBuilder};

use crate::http::{decode, expect_empty, with_query};
use crate::wire::ListEnvelope;
use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Fetch one page of the account's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_tasks(
        &self,
        params: PageParams,
        filters: &TaskFilters,
    ) -> Result<Page<Task>, ClientError> {
        let resp = self.list_tasks_request(params, filters).send().await?;
        let envelope: ListEnvelope<Task> = decode(resp).await?;
        Ok(envelope.into_page(params))
    }

    /// Fetch a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]; a missing task is `Api { status: 404, .. }`.
    pub async fn get_task(&self, task_id: &str) -> Result<Task, ClientError> {
        let url = self.account_url(&["tasks", task_id]);
        decode(self.request(Method::GET, &url).send().await?).await
    }

    /// Create a task from validated input.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn create_task(&self, input: &TaskInput) -> Result<Task, ClientError> {
        let task: Task = decode(self.create_task_request(input).send().await?).await?;
        tracing::debug!(task_id = %task.id, "created task");
        Ok(task)
    }

    /// Replace a task's title and description.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn update_task(&self, task_id: &str, input: &TaskInput) -> Result<Task, ClientError> {
        decode(self.update_task_request(task_id, input).send().await?).await
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), ClientError> {
        let url = self.account_url(&["tasks", task_id]);
        expect_empty(self.request(Method::DELETE, &url).send().await?).await
    }

    fn list_tasks_request(&self, params: PageParams, filters: &TaskFilters) -> RequestBuilder {
        let mut pairs = vec![
            ("page", params.page.to_string()),
            ("size", params.size.to_string()),
        ];
        pairs.extend(filters.query_pairs());
        let url = with_query(&self.account_url(&["tasks"]), &pairs);
        self.request(Method::GET, &url)
    }

    fn create_task_request(&self, input: &TaskInput) -> RequestBuilder {
        let url = self.account_url(&["tasks"]);
        self.request(Method::POST, &url).json(input)
    }

    fn update_task_request(&self, task_id: &str, input: &TaskInput) -> RequestBuilder {
        let url = self.account_url(&["tasks", task_id]);
        self.request(Method::PATCH, &url).json(input)
    }
}
