pub(crate) mod main_nav;
pub(crate) mod navbar;
pub(crate) mod ui;
