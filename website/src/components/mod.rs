pub mod footer;
pub mod icons;
pub mod modal;
pub mod navbar;
pub mod tech_stack;
