// Gateway module for portfolio sections - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod data;
mod icons;
mod render;

// Public re-exports - the ONLY way to access section functionality
pub use data::PortfolioData;
pub use icons::{TechIcon, FEATURED_TECHNOLOGIES};
pub use render::{date_range, render_section, LineKind, Section, SectionLine};
