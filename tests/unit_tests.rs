//! Configuration tests run against the public API.

mod unit;
