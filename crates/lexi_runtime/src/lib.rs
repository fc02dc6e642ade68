//! lexi-runtime — the tutoring backend behind the chat endpoint.
//!
//! Ties the pieces together: prompt assembly ([`prompt`]), session lifecycle
//! ([`sessions`], [`chat`]), the generator seam ([`generator`]) and the
//! reply-repair pass ([`salvage`]) that runs before `lexi_parser` splits the
//! raw model output into text and widget payload.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use lexi_runtime::{PromptConfig, RuntimeConfig, TutorService};
//! # use lexi_runtime::{Generator, GenerateRequest, RuntimeError};
//! # #[derive(Debug)]
//! # struct MyGenerator;
//! # #[async_trait::async_trait]
//! # impl Generator for MyGenerator {
//! #     fn id(&self) -> &str { "my" }
//! #     async fn generate(&self, _: GenerateRequest) -> Result<String, RuntimeError> {
//! #         Ok(String::new())
//! #     }
//! # }
//!
//! # async fn run() -> Result<(), RuntimeError> {
//! let service = TutorService::new(
//!     RuntimeConfig::from_env(),
//!     PromptConfig::default(),
//!     Arc::new(MyGenerator),
//! );
//!
//! let profile = lexi_core::LearnerProfile::new().with_answer("certified", "yes");
//! let reply = service.handle_message("Anna", &profile, "start").await?;
//! println!("{}", reply.reply.text_content);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod generator;
pub mod greeting;
pub mod prompt;
pub mod salvage;
pub mod sessions;

pub use chat::{ChatReply, TutorService, START_MESSAGE};
pub use config::{GenerationConfig, RuntimeConfig};
pub use error::RuntimeError;
pub use generator::{GenerateRequest, Generator, GeneratorRegistry};
pub use greeting::{build_greeting, build_initial_history};
pub use prompt::{
    build_background, image_assets, load_education_plan, ImageAsset, PromptConfig, PromptSection,
};
pub use salvage::unwrap_response_wrapper;
pub use sessions::SessionStore;
