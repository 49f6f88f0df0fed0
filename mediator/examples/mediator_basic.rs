use async_trait::async_trait;
use mediator::command::Command;
use mediator::command_handler::CommandHandler;
use mediator::context::DispatchContext;
use mediator::error::Error;
use mediator::query::Query;
use mediator::query_handler::QueryHandler;
use mediator::type_util::base_name;
use mediator::{HandlerRegistry, Mediator};
use std::sync::Arc;

#[derive(Debug)]
struct Hello {
    name: String,
}

impl Command for Hello {
    const NAME: &'static str = "Hello";
}

struct HelloHandler;

#[async_trait]
impl CommandHandler<Hello> for HelloHandler {
    async fn handle(&self, _ctx: &DispatchContext, cmd: Hello) -> Result<(), Error> {
        println!("Hello {}, welcome to the world!", cmd.name);
        Ok(())
    }
}

#[derive(Debug)]
struct TheAnswer;

impl Query for TheAnswer {
    const NAME: &'static str = "TheAnswer";
    type Output = i32;
}

struct TheAnswerHandler;

#[async_trait]
impl QueryHandler<TheAnswer> for TheAnswerHandler {
    async fn handle(&self, _ctx: &DispatchContext, _q: TheAnswer) -> Result<i32, Error> {
        Ok(42)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(HandlerRegistry::new());
    registry.register_command::<Hello, _>(Arc::new(HelloHandler))?;
    registry.register_query::<TheAnswer, _>(Arc::new(TheAnswerHandler))?;

    let mediator = Mediator::new(&registry);
    let ctx = DispatchContext::builder()
        .maybe_correlation_id(Some("cor-1".into()))
        .maybe_idempotency_key(Some("idem-1".into()))
        .build();

    mediator
        .dispatch(&ctx, Hello { name: "Luis".into() })
        .await?;

    let answer = mediator.query(&ctx, TheAnswer).await?;
    println!("the answer is {answer}");

    // 未注册的命令 -> 返回 HandlerNotFound 错误
    #[derive(Debug)]
    struct Unrouted;

    impl Command for Unrouted {
        const NAME: &'static str = "Unrouted";
    }

    if let Err(Error::HandlerNotFound(full_name)) =
        mediator.dispatch(&ctx, Unrouted).await
    {
        eprintln!(
            "no handler for command: {}",
            base_name(full_name).unwrap_or(full_name)
        );
    }
    Ok(())
}
