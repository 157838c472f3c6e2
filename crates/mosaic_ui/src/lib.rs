//! # MOSAIC UI Core
//!
//! Two widget subsystems layered over an immediate-mode host:
//! - A hierarchical region engine that partitions a window into rows,
//!   groups, and leaf cells with hover tracking and focus fan-out
//! - Segmented button groups with proportional pixel widths and a
//!   deferred action queue drained at the end of every frame
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  InputState → Region Layout → Draw → Button Groups → Drain   │
//! │       ↓             ↓           ↓          ↓           ↓     │
//! │  Hit Testing    Geometry    Commands   Actions     Message   │
//! │                   Pass       Emitted   Applied     Log Draw  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! The host owns the window, the fonts, and the clock. This crate owns the
//! state. Once per frame the host hands over a content area and an input
//! snapshot and receives a flat command list back. Nothing in here blocks,
//! spawns, or draws a pixel.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod context;
pub mod input;
pub mod layout;
pub mod message;
pub mod region;
pub mod render;
pub mod style;
pub mod widget;

pub use context::UiContext;
pub use input::{InputState, MouseButton};
pub use layout::Rect;
pub use message::MessageLog;
pub use region::{ConfigError, NodeSpec, RegionConfig, RegionId, RegionKind, RegionManager, RegionTree};
pub use render::{FrameRenderer, MonospaceMetrics, RenderCommand, TextMetrics};
pub use style::{ButtonStyle, Color, LogStyle, RegionStyle, Theme};
pub use widget::{Button, ButtonConfig, ButtonGroup, ButtonManager, UiAction};
