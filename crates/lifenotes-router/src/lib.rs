//! Navigation state for the life-notes site
//!
//! - [`TabRouter`]: tabbed pages, `?stage=` selection, request tokens
//! - [`MenuOverlay`]: the header menu
//! - [`PageNavigator`]: page switching with once-only markdown sections

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod menu;
pub mod navigator;
pub mod query;
pub mod router;

pub use menu::{MenuOverlay, MenuState};
pub use navigator::{Navigation, PageNavigator};
pub use router::{
    tab_bar, Completion, LoadRequest, PanelProjection, RequestToken, RouterConfig, TabRouter,
    TabView, Transition, GENERATION_STAGES,
};
