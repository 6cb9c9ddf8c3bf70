use sqlx::{PgExecutor, Result as SqlxResult};
use tracing::debug;

use crate::{db::Db, error::Result, models::UserRow};

use super::posts::{self, CreatePostData};

#[derive(Debug, Clone)]
pub struct NestedPostData {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub posts: Vec<NestedPostData>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email
        FROM users
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: &str) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Author of a post, looked up through the post id.
///
/// Returns `None` both when the post is unknown and when it has no author.
pub async fn get_author_of_post<'e>(
    executor: impl PgExecutor<'e>,
    post_id: &str,
) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT u.id, u.name, u.email
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(executor)
    .await
}

/// Create a user together with its nested posts.
///
/// The user row and every post row are written in one transaction, so a
/// failing post leaves no user behind.
pub async fn create(db: &Db, data: CreateUserData) -> Result<UserRow> {
    let mut tx = db.begin().await?;

    let user = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, name)
        VALUES ($1, $2)
        RETURNING id, name, email
        "#,
    )
    .bind(&data.email)
    .bind(&data.name)
    .fetch_one(&mut *tx)
    .await?;

    for post in data.posts {
        posts::create(
            &mut *tx,
            CreatePostData {
                title: post.title,
                content: post.content,
                author_id: Some(user.id.clone()),
            },
        )
        .await?;
    }

    tx.commit().await?;
    debug!(user_id = %user.id, "created user");

    Ok(user)
}
