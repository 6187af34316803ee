//! Headless contact form: field state, submission and user feedback, without
//! any rendering.

pub mod api;
pub mod form;
