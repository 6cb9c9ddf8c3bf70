use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::config::GraphqlConfig;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema.
///
/// The store handle is not baked in: the HTTP handler attaches an
/// `AppState` to every request, and resolvers read it via
/// `ctx.data::<AppState>()`.
pub fn build_schema(config: &GraphqlConfig) -> AppSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .limit_depth(15)
    .limit_complexity(200);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
