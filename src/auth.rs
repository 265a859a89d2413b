//! Client credential and scope models carried through provider resolution untouched.

pub mod scope;
pub mod secret;

pub use scope::*;
pub use secret::*;
