//! # Presentation Layer
//!
//! Everything between a resolved `ContentEntry` and the terminal.
//!
//! ## 🏗️ Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//!                                                                  ==(TUI)===> [ Widgets ] --> terminal
//! ```
//!
//! ## 🌟 Rules
//!
//! 1. **ViewModels carry data, not formatting.** `--format json` dumps the
//!    full ViewModel, so wrapping and colours belong to views.
//! 2. **Charts stay data until the last moment.** Views hand `ChartSpec`s to
//!    a `ChartAdapter`; the text adapter feeds the console, the ratatui
//!    adapter feeds the TUI.
//! 3. **The TUI renderer owns UI state only.** Navigation lives in
//!    `NavigationState`; scroll offset lives in the renderer; every frame
//!    re-runs the presenter.
//!
//! ## 📂 Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Turn content into a view model | `presenters/` |
//! | Change how prose or tables wrap | `views/layout.rs` |
//! | Change a colour or a console layout | `views/` |
//! | Draw a new chart kind | `charts/` |
//! | Handle a key in the dashboard | `renderers/tui.rs` |

pub mod charts;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
