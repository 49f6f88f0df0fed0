pub mod bootstrap;
pub mod command;
pub mod command_handler;
pub mod context;
pub mod error;
pub mod mediator;
pub mod query;
pub mod query_handler;
pub mod registry;
pub mod scope;
pub mod type_util;

pub use mediator::Mediator;
pub use registry::HandlerRegistry;
