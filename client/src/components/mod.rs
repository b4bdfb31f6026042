//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one section of the landing page. Only the
//! consultation form reads shared state; the rest is static markup.

pub mod approach_section;
pub mod consultation_form;
pub mod hero;
pub mod nav_bar;
pub mod process_section;
pub mod services_section;
pub mod site_footer;
