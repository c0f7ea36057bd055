//! Domain layer - Pure computational logic
//!
//! This module contains the table model, course mapping, ordering and lookup
//! without any file or console I/O.

pub mod course;
pub mod lookup;
pub mod ordering;
pub mod table;
pub mod tokenizer;
