#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Savings-habit startup check sheet.
//!
//! A short questionnaire (name, age group, occupation, living arrangement,
//! money worries, learning topic, savings goal) whose posted answers show up
//! in a newest-first feed of cards.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod tui;
