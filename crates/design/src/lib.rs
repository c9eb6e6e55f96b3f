pub mod document;
pub mod fallback;
pub mod normalize;

// Re-export main types
pub use document::{DesignColors, DesignComponent, DesignDocument, DesignMeta};
pub use fallback::fallback_tokens;
pub use normalize::{normalize_tokens, TokenValue};
