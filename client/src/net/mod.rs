//! Networking modules for the booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the core crate's directory and booking service traits
//! over `gloo-net`, so the form component never builds requests itself.

pub mod api;
