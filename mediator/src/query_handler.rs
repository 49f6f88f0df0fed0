use crate::{context::DispatchContext, error::Error, query::Query};
use async_trait::async_trait;

#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, ctx: &DispatchContext, q: Q) -> Result<Q::Output, Error>;
}
