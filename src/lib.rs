//! polycalc: polynomial arithmetic over Z_p, factor rings and irreducibility checks
//!
//! Layered like the binary it backs:
//! - `domain`: coefficient fields, polynomials, factor ring elements, navigation tree
//! - `application`: input parsing, calculator and session services
//! - `infrastructure`: filesystem/console seams and dependency wiring
//! - `cli`: argument parsing, command dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
