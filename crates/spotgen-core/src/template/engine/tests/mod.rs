//! Tests for the substitution engine
//!
//! Organized by stage, plus whole-page rendering.

use super::*;

// Test helper functions
mod helpers;

mod render_sub_location;

// Whole-page rendering and inspection
mod render_page;
