//! Property tests and worked scenarios against the public `Tree` API.

mod scenarios;
mod tree;
