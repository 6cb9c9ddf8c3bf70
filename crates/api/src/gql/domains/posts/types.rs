use async_graphql::InputObject;

/// A post created together with its author.
#[derive(InputObject)]
pub struct PostCreateInput {
    pub title: String,
    pub content: String,
}
