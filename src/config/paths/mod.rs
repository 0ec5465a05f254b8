//! Well-known configuration and data locations.

pub mod xdg_root;
