//! Metro path planner server.
//!
//! A web application that answers: "which stations do I pass through to
//! get from here to there, and what will it cost?"

pub mod cache;
pub mod domain;
pub mod geo;
pub mod network;
pub mod planner;
pub mod web;
