pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod debounce;
pub mod download;
pub mod format;
pub mod icons;
