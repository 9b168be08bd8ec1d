//! Textual front end for the two input formats.
//!
//! - **parser**: Line-oriented parsing of the d-separation batch format
//!   (`N M Q` header, edge lines, query lines) and the I-equivalence format
//!   (two `N M` headed edge lists)

pub mod parser;
