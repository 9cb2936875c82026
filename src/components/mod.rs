//! Reusable view components for the results and thread pages.

pub mod comment_block;
pub mod stat_card;
pub mod threshold_slider;
pub mod toggle_all;
