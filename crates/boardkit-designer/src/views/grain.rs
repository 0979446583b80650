//! Grain texture: faint lines running along the grain of each strip.

use crate::scene::Primitive;
use boardkit_core::{HexColor, Placement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lines per inch of strip width.
const LINES_PER_INCH: f64 = 5.0;
const GRAIN_OPACITY: f64 = 0.05;
/// Points
const GRAIN_WIDTH: f64 = 0.5;

/// Deterministic seed for a strip, so the same design always renders the same texture.
fn seed_for(placement: &Placement<'_>) -> u64 {
    // FNV-1a over the inputs that define the strip's look
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    let mut feed = |bytes: &[u8]| {
        for b in bytes {
            hash ^= *b as u64;
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
    };
    feed(&(placement.index as u64).to_le_bytes());
    feed(&placement.extent.to_bits().to_le_bytes());
    feed(&placement.length.to_bits().to_le_bytes());
    feed(placement.strip.wood.as_bytes());
    hash
}

/// Grain lines for one strip drawn in the rectangle `(x, y, width, height)`.
///
/// `along_y` selects grain running along the y axis (edge grain) or the
/// x axis (end grain). The line count follows the strip's own width.
pub fn grain_lines(
    placement: &Placement<'_>,
    (x, y, width, height): (f64, f64, f64, f64),
    along_y: bool,
) -> Vec<Primitive> {
    let count = (placement.extent * LINES_PER_INCH) as usize;
    let mut rng = StdRng::seed_from_u64(seed_for(placement));

    (0..count)
        .map(|_| {
            let (from, to) = if along_y {
                let lx = x + rng.random_range(0.0..=width);
                let start = y + rng.random_range(0.0..=height * 0.2);
                let end = y + rng.random_range(height * 0.8..=height);
                ((lx, start), (lx, end))
            } else {
                let ly = y + rng.random_range(0.0..=height);
                let start = x + rng.random_range(0.0..=width * 0.2);
                let end = x + rng.random_range(width * 0.8..=width);
                ((start, ly), (end, ly))
            };
            Primitive::Line {
                from,
                to,
                color: HexColor::BLACK,
                width: GRAIN_WIDTH,
                opacity: GRAIN_OPACITY,
            }
        })
        .collect()
}
