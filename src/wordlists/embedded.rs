//! Dictionary compiled into the binary
//!
//! Generated by the build script from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
