//! Pickwheel interaction controller
//!
//! Drag, momentum, snap-to-center, and selection state for vertically
//! scrolling columns of selectable items. The crate owns no rendering and
//! no event loop: the host feeds pointer samples, clicks, and frame ticks
//! through [`update::update`] and renders from the returned events.
//!
//! Notes
//! - Single-threaded by design; all ordering comes from the host's event
//!   queue and per-frame ticks.
//! - Timestamps are injected on every message, so tests drive the physics
//!   by stepping frames manually.

pub mod active;
pub mod column;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod messages;
pub mod motion;
pub mod selection;
pub mod state;
pub mod timers;
pub mod update;

pub use column::{ColumnGeometry, ColumnId, ColumnState};
pub use config::{MotionConfig, PickerConfig, SnapConfig};
pub use error::ColumnError;
pub use item::{Item, ItemId, SelectionPayload};
pub use messages::{Event, Message, PointerKind};
pub use state::{ColumnController, PickerState};
pub use update::update;
