//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles reading course sources and writing tables back to disk.

pub mod table_io;
