use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use chrono::{DateTime, Utc};

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::models::{PostRow, UserRow};
use infra::repos::{posts, users};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[graphql(skip)]
    pub author_id: Option<String>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author_id: row.author_id,
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts authored by this user, oldest first.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = posts::list_by_author(&state.db, &self.id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        if self.author_id.is_none() {
            return Ok(None);
        }

        let state = ctx.data::<AppState>()?;
        let row = users::get_author_of_post(&state.db, &self.id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(User::from))
    }
}
