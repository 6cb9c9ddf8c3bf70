use async_graphql::InputObject;

use crate::gql::domains::posts::PostCreateInput;

#[derive(InputObject)]
pub struct UserCreateInput {
    pub email: String,
    pub name: String,
    pub posts: Option<Vec<PostCreateInput>>,
}
