pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod theme;

pub use chart::{ChartError, ChartSpec, Section, StrokeCap, load_chart};
pub use config::{ChartConfig, Config, RenderConfig, load_config};
pub use layout::{ChartLayout, Dimensions, compute_layout};
pub use render::render_svg;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
