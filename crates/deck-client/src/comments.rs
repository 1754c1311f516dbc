//! Comment endpoints, nested under a task.

use deck_core::entities::Comment;
use deck_core::page::{Page, PageParams};
use deck_core::validation::CommentInput;
use reqwest::{Method, RequestBuilder};

use crate::http::{decode, expect_empty, with_query};
use crate::wire::ListEnvelope;
use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Fetch one page of a task's comments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_comments(
        &self,
        task_id: &str,
        params: PageParams,
    ) -> Result<Page<Comment>, ClientError> {
        let resp = self.list_comments_request(task_id, params).send().await?;
        let envelope: ListEnvelope<Comment> = decode(resp).await?;
        Ok(envelope.into_page(params))
    }

    /// Fetch a single comment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]; a missing comment is `Api { status: 404, .. }`.
    pub async fn get_comment(&self, task_id: &str, comment_id: &str) -> Result<Comment, ClientError> {
        let url = self.account_url(&["tasks", task_id, "comments", comment_id]);
        decode(self.request(Method::GET, &url).send().await?).await
    }

    /// Add a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn create_comment(
        &self,
        task_id: &str,
        input: &CommentInput,
    ) -> Result<Comment, ClientError> {
        let url = self.account_url(&["tasks", task_id, "comments"]);
        decode(self.request(Method::POST, &url).json(input).send().await?).await
    }

    /// Replace a comment's content.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn update_comment(
        &self,
        task_id: &str,
        comment_id: &str,
        input: &CommentInput,
    ) -> Result<Comment, ClientError> {
        let url = self.account_url(&["tasks", task_id, "comments", comment_id]);
        decode(self.request(Method::PATCH, &url).json(input).send().await?).await
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or is rejected.
    pub async fn delete_comment(&self, task_id: &str, comment_id: &str) -> Result<(), ClientError> {
        let url = self.account_url(&["tasks", task_id, "comments", comment_id]);
        expect_empty(self.request(Method::DELETE, &url).send().await?).await
    }

    fn list_comments_request(&self, task_id: &str, params: PageParams) -> RequestBuilder {
        let url = with_query(
            &self.account_url(&["tasks", task_id, "comments"]),
            &[
                ("page", params.page.to_string()),
                ("size", params.size.to_string()),
            ],
        );
        self.request(Method::GET, &url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::tests::client;

    use super::*;

    #[test]
    fn list_request_is_nested_under_task() {
        let client = client("http://api.test");
        let request = client
            .list_comments_request("task-7", PageParams::new(1, 20))
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://api.test/accounts/account%201/tasks/task-7/comments?page=1&size=20"
        );
    }
}
