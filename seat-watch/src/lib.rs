//! Train seat watcher.
//!
//! Polls a train-reservation service for general-seat availability on a
//! route and date, and claims a seat the moment one appears.

pub mod acquire;
pub mod booking;
pub mod cli;
pub mod domain;
pub mod notify;
