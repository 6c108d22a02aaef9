pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod signer;
pub mod stages;

pub use crate::core::{PipelineError, PipelineResult, PipelineSummary, SignatureReport};
pub use engine::{
    create_default_signer_engine, create_quiet_signer_engine, sign_sequence, Pipeline,
    SignerEngine, WorkerPool,
};
