//! Embedded answer list
//!
//! Compiled into the binary at build time from `data/answers.txt`.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
