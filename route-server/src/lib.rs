//! Train route search server.
//!
//! A web service that answers: "given a source and a destination station,
//! which trains connect them?", either directly or with one change.

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod timetable;
pub mod web;
