//! End-to-end pipeline tests with fake host and renderer

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{json, Value};
use spyglass::core::{AddonError, BlockId, CodeBlock, DiagramId, ThemeMode};
use spyglass::orchestrator::{
    AddonSettings, DiagramRenderer, DocumentHost, Orchestrator, RenderedDiagram,
};
use spyglass::zoom::{EventKind, GestureHost, ListenerId, ListenerTarget};

/// One candidate block in the fake document
struct FakeBlock {
    code: Option<String>,
    processed: bool,
    /// Simulates a missing graphic root after render
    swap_fails: bool,
}

impl FakeBlock {
    fn with_code(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            processed: false,
            swap_fails: false,
        }
    }
}

#[derive(Default)]
struct FakeGestures {
    next_id: u64,
    active: Vec<(ListenerId, ListenerTarget, EventKind)>,
    native_disabled: u32,
}

impl GestureHost for FakeGestures {
    fn add_listener(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push((id, target, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.active.retain(|(active_id, _, _)| *active_id != id);
    }

    fn disable_native_gestures(&mut self) {
        self.native_disabled += 1;
    }
}

#[derive(Default)]
struct FakeDocument {
    blocks: Vec<FakeBlock>,
    swapped: Vec<(BlockId, DiagramId, String)>,
    gestures: HashMap<DiagramId, FakeGestures>,
}

impl FakeDocument {
    fn push(&mut self, block: FakeBlock) {
        self.blocks.push(block);
    }
}

impl DocumentHost for FakeDocument {
    fn candidates(&mut self) -> Vec<BlockId> {
        (0..self.blocks.len() as u64).map(BlockId).collect()
    }

    fn is_processed(&self, block: BlockId) -> bool {
        self.blocks[block.0 as usize].processed
    }

    fn code_block(&self, block: BlockId) -> Option<CodeBlock> {
        self.blocks[block.0 as usize]
            .code
            .as_deref()
            .map(CodeBlock::new)
    }

    fn swap_in_graphic(&mut self, block: BlockId, diagram: &DiagramId, markup: &str) -> bool {
        let entry = &mut self.blocks[block.0 as usize];
        if entry.swap_fails {
            return false;
        }
        entry.processed = true;
        self.swapped
            .push((block, diagram.clone(), markup.to_string()));
        true
    }

    fn gestures(&mut self, diagram: &DiagramId) -> &mut dyn GestureHost {
        self.gestures.entry(diagram.clone()).or_default()
    }
}

/// Renderer that emits a canned SVG and records what it was asked to draw
struct FakeRenderer {
    calls: Rc<RefCell<Vec<(String, String, Value)>>>,
    fail: bool,
    bound: Rc<RefCell<Vec<String>>>,
}

impl FakeRenderer {
    fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            fail: false,
            bound: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl DiagramRenderer for FakeRenderer {
    fn render(
        &mut self,
        id: &DiagramId,
        code: &str,
        config: &Value,
    ) -> Result<RenderedDiagram, AddonError> {
        self.calls
            .borrow_mut()
            .push((id.to_string(), code.to_string(), config.clone()));

        if self.fail {
            return Err(AddonError::render_error("syntax error in text".to_string()));
        }

        let bound = Rc::clone(&self.bound);
        Ok(RenderedDiagram::with_bind(
            format!("<svg id=\"{}\"></svg>", id),
            Box::new(move |diagram| bound.borrow_mut().push(diagram.to_string())),
        ))
    }
}

fn settings_with_zoom() -> AddonSettings {
    AddonSettings {
        zoom_enabled: true,
        ..Default::default()
    }
}

#[test]
fn test_accepted_block_is_rendered_and_swapped() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let bound = Rc::clone(&renderer.bound);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(document.swapped.len(), 1);
    let (_, diagram, markup) = &document.swapped[0];
    assert_eq!(diagram.as_str(), "mermaid-0");
    assert!(markup.contains("mermaid-0"));

    // Post-render binder ran with the inserted diagram's id
    assert_eq!(bound.borrow().as_slice(), ["mermaid-0"]);

    // Zoom controller attached and registered listeners
    assert_eq!(orchestrator.controller_count(), 1);
    let gestures = &document.gestures[&DiagramId::new(0)];
    assert_eq!(gestures.active.len(), 5);
    assert_eq!(gestures.native_disabled, 1);
}

#[test]
fn test_rejected_block_left_untouched() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("println!(\"hello\");"));

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    assert!(calls.borrow().is_empty());
    assert!(document.swapped.is_empty());
    assert_eq!(orchestrator.controller_count(), 0);
}

#[test]
fn test_block_without_code_element_skipped() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock {
        code: None,
        processed: false,
        swap_fails: false,
    });

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    assert!(calls.borrow().is_empty());
    assert!(document.swapped.is_empty());
}

#[test]
fn test_already_processed_block_skipped() {
    let mut document = FakeDocument::default();
    let mut block = FakeBlock::with_code("graph LR\nA-->B");
    block.processed = true;
    document.push(block);

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    assert!(calls.borrow().is_empty());
}

#[test]
fn test_renderer_failure_skips_block_silently() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));
    document.push(FakeBlock::with_code("pie title Pets\n\"Dogs\": 3"));

    let mut renderer = FakeRenderer::new();
    renderer.fail = true;
    let calls = Rc::clone(&renderer.calls);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    // Both blocks reached the renderer, neither was swapped in
    assert_eq!(calls.borrow().len(), 2);
    assert!(document.swapped.is_empty());
    assert_eq!(orchestrator.controller_count(), 0);
}

#[test]
fn test_missing_graphic_root_skips_zoom() {
    let mut document = FakeDocument::default();
    let mut block = FakeBlock::with_code("graph LR\nA-->B");
    block.swap_fails = true;
    document.push(block);

    let renderer = FakeRenderer::new();
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    assert!(document.swapped.is_empty());
    assert_eq!(orchestrator.controller_count(), 0);
}

#[test]
fn test_zoom_disabled_attaches_nothing() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));

    let renderer = FakeRenderer::new();
    let settings = AddonSettings::default();
    let mut orchestrator = Orchestrator::new(renderer, settings);

    orchestrator.process(&mut document);

    assert_eq!(document.swapped.len(), 1);
    assert_eq!(orchestrator.controller_count(), 0);
    assert!(document.gestures.is_empty());
}

#[test]
fn test_diagram_ids_are_sequential() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));
    document.push(FakeBlock::with_code("not a diagram"));
    document.push(FakeBlock::with_code("sequenceDiagram\nAlice->>Bob: hi"));

    let renderer = FakeRenderer::new();
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);

    let ids: Vec<&str> = document
        .swapped
        .iter()
        .map(|(_, diagram, _)| diagram.as_str())
        .collect();
    // The rejected block does not consume a sequence number
    assert_eq!(ids, ["mermaid-0", "mermaid-1"]);
}

#[test]
fn test_rescan_only_touches_new_blocks() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);
    assert_eq!(calls.borrow().len(), 1);

    // New block appears, old one is already processed
    document.push(FakeBlock::with_code("gantt\ntitle Timeline"));
    orchestrator.process(&mut document);

    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(document.swapped.len(), 2);
    assert_eq!(orchestrator.controller_count(), 2);
}

#[test]
fn test_renderer_receives_resolved_config() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));

    let renderer = FakeRenderer::new();
    let calls = Rc::clone(&renderer.calls);
    let settings = AddonSettings {
        mode: ThemeMode::Dark,
        zoom_enabled: false,
        ..Default::default()
    };
    let mut orchestrator = Orchestrator::new(renderer, settings);

    orchestrator.process(&mut document);

    let (_, _, config) = calls.borrow()[0].clone();
    assert_eq!(config, json!({"theme": "dark"}));
}

#[test]
fn test_dispose_all_tears_down_every_controller() {
    let mut document = FakeDocument::default();
    document.push(FakeBlock::with_code("graph LR\nA-->B"));
    document.push(FakeBlock::with_code("mindmap\n  root"));

    let renderer = FakeRenderer::new();
    let mut orchestrator = Orchestrator::new(renderer, settings_with_zoom());

    orchestrator.process(&mut document);
    assert_eq!(orchestrator.controller_count(), 2);

    orchestrator.dispose_all(&mut document);

    assert_eq!(orchestrator.controller_count(), 0);
    for gestures in document.gestures.values() {
        assert!(gestures.active.is_empty());
    }
}
