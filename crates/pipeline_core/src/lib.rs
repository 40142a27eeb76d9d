//! Staged analysis pipelines with shared keyed state.
//!
//! A [`SequentialPipeline`] runs an ordered list of [`PipelineStage`]s, each
//! consuming named values from a [`PipelineState`] and publishing exactly one
//! new key. Stages that delegate to an external reasoning process do so
//! through the [`Reasoner`] seam, which returns unstructured text that is
//! recovered best-effort via [`parse_reasoner_output`].

pub mod pipeline;
pub mod reasoner;
pub mod retry;
pub mod stage;
pub mod state;

pub use pipeline::{PipelineError, SequentialPipeline};
pub use reasoner::{
    extract_json_from_text, parse_reasoner_output, Reasoner, ReasonerError, ReasonerRequest,
};
pub use retry::{RetryPolicy, RetryStage};
pub use stage::{PipelineStage, StageError};
pub use state::PipelineState;
