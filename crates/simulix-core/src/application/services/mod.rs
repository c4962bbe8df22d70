//! Application services - orchestrate use cases.
//!
//! Each service owns one step of a generation run. [`WorkspaceAssembler`]
//! wires them together in order.

pub mod archive_ingester;
pub mod definition_injector;
pub mod extension_resolver;
pub mod naming_resolver;
pub mod template_renderer;
pub mod workspace_assembler;

pub use archive_ingester::ArchiveIngester;
pub use definition_injector::DefinitionInjector;
pub use extension_resolver::{ExtensionResolver, Resolution};
pub use naming_resolver::NamingResolver;
pub use template_renderer::TemplateRenderer;
pub use workspace_assembler::{
    GenerationReport, GenerationRequest, PackageRequest, SUPPORT_DIRECTORIES, WorkspaceAssembler,
};
