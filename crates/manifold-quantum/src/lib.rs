//! # Manifold Quantum
//!
//! The stateful substrate of manifested reality:
//!
//! ```text
//! QuantumCell            ← amplitude/phase, fully entangled with siblings
//!     │
//! QuantumRegister        ← the 12-cell set owned by one pixel
//!     │
//! RealityPixel           ← one manifested intent + its register
//!     │
//! RealityAssembler       ← hex-grid packing, dimensional reduction
//! ```
//!
//! Phase jitter at cell creation and id suffixes are the only sources of
//! nondeterminism; both flow through the injectable [`Entropy`] source so
//! tests can seed them. Timestamps flow through [`Clock`] for the same
//! reason.

pub mod assembler;
pub mod cell;
pub mod clock;
pub mod entropy;
pub mod pixel;
pub mod register;

pub use assembler::{PackedGrid, pack, reduce_dimensionality};
pub use cell::QuantumCell;
pub use clock::Clock;
pub use entropy::Entropy;
pub use pixel::RealityPixel;
pub use register::{CELLS_PER_PIXEL, QuantumRegister};
