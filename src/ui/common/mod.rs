//! Common reusable UI components
//!
//! Form field components shared by the review and quote forms.

pub mod form;

pub use form::{FormField, SelectField, TextAreaField};
