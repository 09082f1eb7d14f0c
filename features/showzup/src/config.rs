use crate::materializer::ExecutionMode;

/// Settings of the view pipeline
///
/// Register it in the container's `ConfigProvider` to have
/// [ViewLoader::from_container](crate::ViewLoader::from_container) pick it up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowzupConfig {
    /// How templates are cloned
    pub execution_mode: ExecutionMode,
}
