//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`color`, `theme`, `a11y`, `i18n`, `ui`) so
//! individual components can depend on small focused models. The plain
//! structs here wrap `appearance` engine types; components hold them in
//! `RwSignal` contexts.

pub mod a11y;
pub mod color;
pub mod i18n;
pub mod theme;
pub mod ui;
