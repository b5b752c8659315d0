//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `ui`, `toast`, `contact`) so individual
//! components can depend on small focused models. Each shared model is held
//! in an `RwSignal` provided by the root `App`.

pub mod cart;
pub mod contact;
pub mod toast;
pub mod ui;
