//! Live station boards for Finnish rail traffic.
//!
//! A web application that answers: "Which trains leave from (or arrive at)
//! this station in the next few hours, and are they on time?"

pub mod board;
pub mod digitraffic;
pub mod domain;
pub mod stations;
pub mod web;
