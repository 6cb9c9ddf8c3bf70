use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::gql::types::Post;
use crate::state::AppState;
use infra::error::StoreError;
use infra::repos::{
    posts,
    posts::{CreatePostData, UpdatePostData},
};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = posts::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Returns null when no id is given or nothing matches it.
    async fn post(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Post>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let row = posts::get_by_id(&state.db, &id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a post connected to an existing user.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let row = posts::create(
            &state.db,
            CreatePostData {
                title,
                content,
                author_id: Some(author),
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    /// Replace title, content and author of a post.
    ///
    /// Every failure, whether the post is missing or the new author is, is
    /// reported with the same message naming the post id.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: String,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post> {
        let state = ctx.data::<AppState>()?;

        let outcome = async {
            if posts::get_by_id(&state.db, &id)
                .await
                .map_err(StoreError::from)?
                .is_none()
            {
                tracing::debug!(post_id = %id, "updating a post that was not found");
            }

            posts::update(
                &state.db,
                &id,
                UpdatePostData {
                    title,
                    content,
                    author_id: author,
                },
            )
            .await
        }
        .await;

        match outcome {
            Ok(row) => Ok(row.into()),
            Err(e) => {
                tracing::debug!(post_id = %id, error = %e, "update_post failed");
                Err(GqlError::new(format!(
                    "Post with ID {id} does not exist in the database."
                ))
                .into())
            }
        }
    }

    /// Delete a post. A missing id surfaces the store's not-found error as is.
    async fn delete_post(&self, ctx: &Context<'_>, id: String) -> Result<Option<Post>> {
        let state = ctx.data::<AppState>()?;
        let row = posts::delete(&state.db, &id)
            .await
            .map_err(GqlError::from)?;
        Ok(Some(row.into()))
    }
}
