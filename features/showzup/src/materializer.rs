use tokio_util::sync::CancellationToken;

use crate::scene::Node;

/// How templates are turned into instances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Work on a throwaway duplicate so the fetched template is never modified
    Development,
    /// Clone the fetched template directly
    Production,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ExecutionMode::Development
        } else {
            ExecutionMode::Production
        }
    }
}

/// Creates isolated instances of templates
///
/// Every view of a new instance starts out inactive, activation is up to the owner.
/// Cancellation is checked before and after cloning; the clone itself is not interrupted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Materializer {
    mode: ExecutionMode,
}

impl Materializer {
    pub fn new(mode: ExecutionMode) -> Self {
        Materializer { mode }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Returns `None` if cancelled, an instance created while cancelling is destroyed
    pub fn materialize(&self, template: &Node, cancellation: &CancellationToken) -> Option<Node> {
        if cancellation.is_cancelled() {
            tracing::debug!("Cancelled before instantiating {}", template.name());
            return None;
        }

        let instance = match self.mode {
            ExecutionMode::Development => {
                let source = template.instantiate();
                deactivate_views(&source);
                let instance = source.instantiate();
                source.destroy();
                instance
            }
            ExecutionMode::Production => {
                deactivate_views(template);
                template.instantiate()
            }
        };

        if cancellation.is_cancelled() {
            tracing::debug!("Cancelled while instantiating {}", template.name());
            instance.destroy();
            return None;
        }

        Some(instance)
    }
}

fn deactivate_views(node: &Node) {
    for view in node.views() {
        view.set_active(false);
    }
}
