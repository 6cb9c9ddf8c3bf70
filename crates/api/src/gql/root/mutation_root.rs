use async_graphql::MergedObject;

use crate::gql::domains::posts::PostMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(UserMutation, PostMutation);
