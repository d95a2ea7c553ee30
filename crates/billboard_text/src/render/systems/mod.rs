//! Active rendering systems
//!
//! This module contains the text system that coordinates layout,
//! rasterization, and bounds derivation.

pub mod text;
