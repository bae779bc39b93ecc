//! The Reality Assembler: hexagonal packing and dimensional reduction.
//!
//! Packing derives a row layout from the pixel collection on every read;
//! the grid is never stored. Reduction is the sole bound on unbounded pixel
//! growth: past the threshold the entire collection collapses into one
//! averaged pixel.

use serde::Serialize;

use crate::clock::Clock;
use crate::entropy::Entropy;
use crate::pixel::RealityPixel;
use crate::register::{CELLS_PER_PIXEL, QuantumRegister};
use manifold_signal::IntentSignal;

/// Slots on even-indexed rows.
pub const ROW_WIDTH_EVEN: usize = 5;
/// Slots on odd-indexed rows (hexagonal offset).
pub const ROW_WIDTH_ODD: usize = 4;
/// Pixel count above which the collection collapses to one pixel.
pub const REDUCTION_THRESHOLD: usize = 24;

/// Observer id stamped on collapsed pixels.
pub const ASSEMBLER_OBSERVER: &str = "assembler";

/// A packed hex grid: rows of pixel indices, `None` for unfilled slots in
/// the final allocated row.
#[derive(Debug, Clone, Serialize)]
pub struct PackedGrid {
    pub rows: Vec<Vec<Option<usize>>>,
    pub placed: usize,
    /// `placed / total allocated slots`; 0.0 for an empty grid.
    pub efficiency: f64,
}

/// Pack pixels first-come-first-served into the hexagonal row layout.
pub fn pack(pixels: &[RealityPixel]) -> PackedGrid {
    pack_with_widths(pixels, ROW_WIDTH_EVEN, ROW_WIDTH_ODD)
}

/// Packing with explicit row widths (both must be nonzero).
pub fn pack_with_widths(pixels: &[RealityPixel], even: usize, odd: usize) -> PackedGrid {
    assert!(even > 0 && odd > 0, "row widths must be nonzero");

    let mut rows: Vec<Vec<Option<usize>>> = Vec::new();
    let mut placed = 0;

    while placed < pixels.len() {
        let width = if rows.len() % 2 == 0 { even } else { odd };
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            if placed < pixels.len() {
                row.push(Some(placed));
                placed += 1;
            } else {
                row.push(None);
            }
        }
        rows.push(row);
    }

    let total_slots: usize = rows.iter().map(Vec::len).sum();
    let efficiency = if total_slots == 0 {
        0.0
    } else {
        placed as f64 / total_slots as f64
    };

    PackedGrid {
        rows,
        placed,
        efficiency,
    }
}

/// Collapse an oversized pixel collection into a single averaged pixel.
///
/// Identity when `pixels.len() <= threshold`. Otherwise the collapsed
/// pixel's cell `i` amplitude is the arithmetic mean of cell `i` amplitude
/// across all inputs; phases are freshly jittered rather than averaged
/// (a mean of circular phases has no useful meaning here). Signal metrics
/// and pressure are likewise averaged, and the originals are discarded.
pub fn reduce_dimensionality(
    pixels: Vec<RealityPixel>,
    threshold: usize,
    entropy: &mut Entropy,
    clock: &Clock,
) -> Vec<RealityPixel> {
    if pixels.len() <= threshold {
        return pixels;
    }

    let n = pixels.len() as f64;

    let mut register = QuantumRegister::new(entropy);
    for index in 0..CELLS_PER_PIXEL {
        let mean = pixels
            .iter()
            .map(|p| p.register().cells()[index].amplitude)
            .sum::<f64>()
            / n;
        register.set_amplitude(index, mean);
    }

    let signal = IntentSignal {
        raw: format!("collapse of {} realities", pixels.len()),
        frequency: pixels.iter().map(|p| p.signal.frequency).sum::<f64>() / n,
        coherence: pixels.iter().map(|p| p.signal.coherence).sum::<f64>() / n,
        entropy: pixels.iter().map(|p| p.signal.entropy).sum::<f64>() / n,
    };
    let pressure = pixels.iter().map(|p| p.pressure).sum::<f64>() / n;

    vec![RealityPixel::from_parts(
        ASSEMBLER_OBSERVER.to_string(),
        signal,
        pressure,
        clock.now(),
        register,
    )]
}
