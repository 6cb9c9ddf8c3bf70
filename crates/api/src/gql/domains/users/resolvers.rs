use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::gql::types::User;
use crate::state::AppState;
use infra::repos::{
    users,
    users::{CreateUserData, NestedPostData},
};

use super::types::UserCreateInput;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = users::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Returns null when no id is given or nothing matches it.
    async fn user(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<User>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        let row = users::get_by_id(&state.db, &id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a user and, in the same write, any posts listed in `data.posts`.
    async fn create_user(&self, ctx: &Context<'_>, data: UserCreateInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        let create_data = CreateUserData {
            email: data.email,
            name: data.name,
            posts: data
                .posts
                .unwrap_or_default()
                .into_iter()
                .map(|post| NestedPostData {
                    title: post.title,
                    content: post.content,
                })
                .collect(),
        };

        let user_row = users::create(&state.db, create_data)
            .await
            .map_err(GqlError::from)?;

        Ok(user_row.into())
    }
}
