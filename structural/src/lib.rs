//! # Structural Patterns in Rust
//!
//! Seven ways to wire objects together, one standalone program per
//! pattern:
//!
//! - `p1_adapter`: make an old interface fit a new one
//! - `p2_decorator`: stack extra behavior around a core object
//! - `p3_composite`: treat trees and leaves uniformly
//! - `p4_facade`: one simple call over several subsystems
//! - `p5_proxy`: stand in for an expensive object, connect lazily
//! - `p6_bridge`: let abstraction and implementation vary separately
//! - `p7_flyweight`: share heavy immutable state between many objects
//!
//! Run any of them with: `cargo run --bin <name>`.
