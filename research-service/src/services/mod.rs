pub mod gemini;
pub mod processor;
pub mod transport;

pub use processor::{ContentProcessor, Operation, ProcessError, FALLBACK_TEXT};
pub use transport::{GenerationTransport, HttpTransport, TransportError};
