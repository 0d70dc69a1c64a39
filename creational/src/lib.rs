//! # Creational Patterns in Rust
//!
//! Five ways to take `new` out of client code, one standalone program per
//! pattern:
//!
//! - `p1_factory_method`: map a runtime key to a boxed implementation
//! - `p2_abstract_factory`: build whole families of matching objects
//! - `p3_builder`: assemble a product step by step under a director
//! - `p4_prototype`: copy a configured object instead of rebuilding it
//! - `p5_singleton`: one lazily created, globally shared instance
//!
//! Run any of them with: `cargo run --bin <name>`.
