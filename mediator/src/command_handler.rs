use crate::{command::Command, context::DispatchContext, error::Error};
use async_trait::async_trait;

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &DispatchContext, cmd: C) -> Result<(), Error>;
}
