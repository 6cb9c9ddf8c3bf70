use sqlx::{PgExecutor, Result as SqlxResult};

use crate::{
    error::{Result, StoreError},
    models::PostRow,
};

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub title: String,
    pub content: String,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdatePostData {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: &str) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Posts written by the given user, oldest first.
pub async fn list_by_author<'e>(
    executor: impl PgExecutor<'e>,
    author_id: &str,
) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE author_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePostData) -> Result<PostRow> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (title, content, author_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(&data.author_id)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Overwrite title, content and author of an existing post.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
    data: UpdatePostData,
) -> Result<PostRow> {
    sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = $2,
            content = $3,
            author_id = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.content)
    .bind(&data.author_id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| StoreError::not_found("update", "Post", id))
}

/// Delete a post and hand back the removed row.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: &str) -> Result<PostRow> {
    sqlx::query_as::<_, PostRow>(
        r#"
        DELETE FROM posts
        WHERE id = $1
        RETURNING id, title, content, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| StoreError::not_found("delete", "Post", id))
}
