//! Pipeline glue: scan, classify, render, swap, attach zoom
//!
//! The orchestrator walks the candidate blocks a [`DocumentHost`] exposes,
//! runs the classifier over each, hands accepted source to the external
//! [`DiagramRenderer`], swaps the rendered graphic into the document, and
//! keeps an arena of pan/zoom controllers keyed by diagram id.
//!
//! Everything here is skip-safe: a block with no code element, a rejected
//! classification, a renderer failure, or a missing graphic root after the
//! swap all log and move on. Nothing propagates, nothing retries.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, span, trace, warn, Level};

use crate::config::{resolve_config, ConfigFragments};
use crate::core::{AddonError, BlockId, CodeBlock, DiagramId, ThemeMode};
use crate::detect::is_mermaid_code;
use crate::zoom::{GestureHost, ZoomController, ZoomOptions};

/// Callback run after a rendered graphic is inserted, e.g. to wire up
/// click handlers the renderer emitted alongside the markup
pub type BindFn = Box<dyn FnOnce(&DiagramId)>;

/// Output of the external renderer: graphic markup plus an optional
/// post-insert binder
pub struct RenderedDiagram {
    pub graphic: String,
    pub bind: Option<BindFn>,
}

impl RenderedDiagram {
    pub fn new(graphic: impl Into<String>) -> Self {
        Self {
            graphic: graphic.into(),
            bind: None,
        }
    }

    pub fn with_bind(graphic: impl Into<String>, bind: BindFn) -> Self {
        Self {
            graphic: graphic.into(),
            bind: Some(bind),
        }
    }
}

/// The external diagram renderer, treated as a black box
pub trait DiagramRenderer {
    fn render(
        &mut self,
        id: &DiagramId,
        code: &str,
        config: &Value,
    ) -> Result<RenderedDiagram, AddonError>;
}

/// The document under augmentation, as seen by the orchestrator.
///
/// The scanning/observation mechanism behind this trait is the host's
/// business; the orchestrator only consumes what it yields.
pub trait DocumentHost {
    /// Candidate blocks discovered in the current page, in document order
    fn candidates(&mut self) -> Vec<BlockId>;

    /// Whether a candidate was already swapped out on an earlier pass
    fn is_processed(&self, block: BlockId) -> bool;

    /// The code text inside a candidate, if a code element exists
    fn code_block(&self, block: BlockId) -> Option<CodeBlock>;

    /// Hide the original block and insert the rendered graphic next to it.
    /// Returns false when no graphic root could be placed, in which case
    /// the block is skipped.
    fn swap_in_graphic(&mut self, block: BlockId, diagram: &DiagramId, markup: &str) -> bool;

    /// Listener registration scoped to one rendered diagram
    fn gestures(&mut self, diagram: &DiagramId) -> &mut dyn GestureHost;
}

/// Host-supplied settings for one orchestrator instance
#[derive(Debug, Clone, Default)]
pub struct AddonSettings {
    pub mode: ThemeMode,
    pub fragments: ConfigFragments,
    pub zoom_enabled: bool,
    pub zoom_options: ZoomOptions,
}

/// Coordinates the detect → render → swap → zoom pipeline over a document
pub struct Orchestrator<R: DiagramRenderer> {
    renderer: R,
    settings: AddonSettings,
    controllers: HashMap<DiagramId, ZoomController>,
    next_sequence: u64,
}

impl<R: DiagramRenderer> Orchestrator<R> {
    pub fn new(renderer: R, settings: AddonSettings) -> Self {
        Self {
            renderer,
            settings,
            controllers: HashMap::new(),
            next_sequence: 0,
        }
    }

    /// Run one pass over the document's candidate blocks.
    ///
    /// Safe to call repeatedly; already-processed blocks are skipped, so a
    /// rescan after incremental page updates only touches new candidates.
    pub fn process(&mut self, host: &mut dyn DocumentHost) {
        let process_span = span!(Level::INFO, "process_document");
        let _enter = process_span.enter();

        let candidates = host.candidates();
        info!(candidates = candidates.len(), "scanning candidate blocks");

        for block in candidates {
            self.process_block(host, block);
        }
    }

    fn process_block(&mut self, host: &mut dyn DocumentHost, block: BlockId) {
        let block_span = span!(Level::DEBUG, "process_block", block = %block);
        let _enter = block_span.enter();

        if host.is_processed(block) {
            trace!("already processed, skipping");
            return;
        }

        let Some(code) = host.code_block(block) else {
            debug!("no code element found, skipping");
            return;
        };

        if !is_mermaid_code(code.text()) {
            trace!("not mermaid source, skipping");
            return;
        }

        let diagram = DiagramId::new(self.next_sequence);
        self.next_sequence += 1;

        let config = resolve_config(self.settings.mode, &self.settings.fragments);
        let rendered = match self.renderer.render(&diagram, code.text(), &config) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(diagram = %diagram, error = %e, "renderer failed, leaving block as-is");
                return;
            }
        };

        if !host.swap_in_graphic(block, &diagram, &rendered.graphic) {
            debug!(diagram = %diagram, "no graphic root after render, skipping");
            return;
        }

        if let Some(bind) = rendered.bind {
            bind(&diagram);
        }

        if self.settings.zoom_enabled {
            let mut controller = ZoomController::new(self.settings.zoom_options.clone());
            controller.attach(host.gestures(&diagram));
            self.controllers.insert(diagram.clone(), controller);
        }

        info!(diagram = %diagram, "diagram rendered and swapped in");
    }

    /// The pan/zoom controller for a rendered diagram, for routing live
    /// pointer/wheel events
    pub fn controller_mut(&mut self, diagram: &DiagramId) -> Option<&mut ZoomController> {
        self.controllers.get_mut(diagram)
    }

    /// Number of diagrams currently carrying a controller
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Tear down every controller, removing all listeners they registered
    pub fn dispose_all(&mut self, host: &mut dyn DocumentHost) {
        for (diagram, mut controller) in self.controllers.drain() {
            controller.dispose(host.gestures(&diagram));
        }
    }
}
