//! Application services that own state transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services sit between pages and persistence. Pages call into them and render
//! from the state they publish; they never touch storage directly.

pub mod session;
