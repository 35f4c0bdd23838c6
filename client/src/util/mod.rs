//! Utility helpers shared across booking form components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of component bodies so they can be unit tested
//! without a browser.

pub mod keys;
pub mod labels;
