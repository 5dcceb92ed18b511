pub mod registry;
pub mod retrievers;
pub mod traits;

pub use registry::ToolRegistry;
pub use retrievers::{Retriever, RetrieverKind, retriever_registry};
pub use traits::{Tool, ToolResult, ToolSpec};
