//! `marquee-theaters` — the theater entity and its mutation rules.

pub mod theater;

pub use theater::{MAX_NAME_LEN, Theater, TheaterDraft};
