//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates the shell to
//! `components`.

pub mod dashboard;
pub mod home;
pub mod learning_path;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod resources;
pub mod settings;
pub mod tutor_chat;
