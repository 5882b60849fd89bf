#![allow(non_snake_case)]

mod body;
mod form;
mod page;
mod songs;
mod stars;

pub use body::Body;
