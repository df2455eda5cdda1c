//! Async runtime adapter: executes effects and sends messages back to the host loop.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
