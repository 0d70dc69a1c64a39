//! # Behavioral Patterns in Rust
//!
//! Eleven standalone programs, one per classic behavioral pattern. Each
//! file is self-contained: a capability trait, two or three concrete
//! variants, and a thin composing object that delegates to the
//! abstraction.
//!
//! ## The patterns
//! - `p1_strategy`: interchangeable algorithms behind one trait, swapped
//!   at runtime
//! - `p2_observer`: one-to-many notification with a mutex-guarded registry
//! - `p3_command`: requests reified as objects, queued and replayed by an
//!   invoker
//! - `p4_chain_of_responsibility`: linked handlers, each taking its slice
//!   of the request space
//! - `p5_state`: a machine whose behavior lives in swappable state objects
//! - `p6_template_method`: a default trait method fixes the step order,
//!   concrete types supply the steps
//! - `p7_iterator`: a generic aggregate exposing traversal through
//!   `std::iter::Iterator`
//! - `p8_mediator`: colleagues that only ever talk through a hub
//! - `p9_memento`: opaque snapshots a caretaker can hand back later
//! - `p10_visitor`: double dispatch, new operations over a fixed element
//!   set without touching the elements
//! - `p11_interpreter`: a tiny boolean grammar evaluated against a
//!   variable context
//!
//! Run any of them with: `cargo run --bin <name>`. `cargo test` exercises
//! the test module embedded in each file.
