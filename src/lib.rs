#![allow(clippy::unreadable_literal, clippy::upper_case_acronyms)]

extern crate byteorder;
extern crate itertools;
extern crate rand;
extern crate rand_core;

pub mod utils;

pub mod prng;
