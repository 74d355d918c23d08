//! Spyglass - Mermaid.js diagram detection and pan/zoom for rendered docs
//!
//! A library that augments a documentation viewer: it classifies embedded
//! code blocks as Mermaid.js source, resolves a theme-aware renderer
//! configuration, swaps accepted blocks for rendered graphics, and drives
//! interactive pan/zoom over the results.
//!
//! # Quick Start
//!
//! ```rust
//! use spyglass::is_mermaid_code;
//!
//! assert!(is_mermaid_code("graph LR\nA-->B-->C"));
//! assert!(!is_mermaid_code("SELECT * FROM diagrams;"));
//! ```
//!
//! # Configuration resolution
//!
//! ```rust
//! use serde_json::json;
//! use spyglass::config::{resolve_config, ConfigFragments};
//! use spyglass::core::ThemeMode;
//!
//! let fragments = ConfigFragments {
//!     dark_config: Some(json!({"themeVariables": {"lineColor": "#999"}})),
//!     ..Default::default()
//! };
//! let config = resolve_config(ThemeMode::Dark, &fragments);
//! assert_eq!(config["theme"], "dark");
//! ```
//!
//! # Pan/zoom
//!
//! The [`zoom::ZoomController`] is host-agnostic: implement
//! [`zoom::Surface`] and [`zoom::GestureHost`] for your document glue and
//! feed it pointer/wheel events. See the `zoom` module docs.

pub mod config;
pub mod core;
pub mod detect;
pub mod orchestrator;
pub mod zoom;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use detect::is_mermaid_code;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{deep_merge, resolve_config, ConfigFragments};
    pub use crate::core::{AddonError, BlockId, CodeBlock, DiagramId, ThemeMode};
    pub use crate::detect::is_mermaid_code;
    pub use crate::orchestrator::{
        AddonSettings, DiagramRenderer, DocumentHost, Orchestrator, RenderedDiagram,
    };
    pub use crate::zoom::{
        Cursor, EventOutcome, GestureHost, Modifiers, PanBounds, Point, PointerButton,
        PointerEvent, Surface, Transform, WheelEvent, ZoomController, ZoomOptions,
    };
}
