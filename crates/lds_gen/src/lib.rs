//! # lds_gen: Low-Discrepancy Sequence Generators
//!
//! Deterministic point sequences that cover their domain more evenly than
//! independent random draws, for quasi-Monte Carlo integration and sampling:
//! - Van der Corput radical inverse (`sequence::vdcorput`)
//! - Halton points in the unit square and hypercube (`sequence::halton`)
//! - Circle, disk, 2-sphere and Hopf 3-sphere mappings (`sequence::circle`,
//!   `sequence::sphere`)
//! - Recursive n-sphere samplers over cached marginal-CDF tables
//!   (`sphere_n`, `math::tables`)
//! - Integer-output generators for fixed-point consumers (`integer`)
//! - Thread-shared generators and rayon bulk generation (`sync`, `batch`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lds_gen::sequence::{Circle, VdCorput};
//! use lds_gen::sphere_n::SphereN;
//! use lds_gen::LowDiscrepancySequence;
//!
//! let mut vgen = VdCorput::new(2).unwrap();
//! vgen.reseed(0);
//! assert_eq!(vgen.pop_batch(3), vec![0.5, 0.25, 0.75]);
//!
//! let mut cgen = Circle::new(2).unwrap();
//! cgen.reseed(0);
//! let [s, c] = cgen.pop();
//! assert!(s.abs() < 1e-15 && (c + 1.0).abs() < 1e-15);
//!
//! let mut sgen = SphereN::new(&[2, 3, 5, 7]).unwrap();
//! sgen.reseed(0);
//! assert_eq!(sgen.pop().len(), 5);
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing` (composite-base warnings, table
//! builds). The library never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for [`config::TableConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod config;
pub mod integer;
pub mod math;
pub mod sequence;
pub mod sphere_n;
pub mod sync;
pub mod types;
pub mod validation;

pub use sequence::LowDiscrepancySequence;
pub use types::LdsError;
