/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::{try_vec, ConvletError};
use crate::ConvSample;
use num_traits::AsPrimitive;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Declares how the padding zones around a signal are filled prior to
/// convolution.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum ExtensionMode {
    /// Padding slots stay zero
    #[default]
    ZeroPad,
    /// Signal is cycled with rule `fgh|abcdefgh|abc`
    Periodic,
    /// Edge sample is replicated with rule `aaa|abcdefgh|hhh`
    Constant,
    /// Linear extrapolation outward from the edge using the local slope
    Smooth,
    /// Signal is mirrored with rule `cba|abcdefgh|hgf`
    Symmetric,
}

impl Display for ExtensionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionMode::ZeroPad => f.write_str("zero-pad"),
            ExtensionMode::Periodic => f.write_str("periodic"),
            ExtensionMode::Constant => f.write_str("constant"),
            ExtensionMode::Smooth => f.write_str("smooth"),
            ExtensionMode::Symmetric => f.write_str("symmetric"),
        }
    }
}

impl FromStr for ExtensionMode {
    type Err = ConvletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero-pad" => Ok(ExtensionMode::ZeroPad),
            "periodic" => Ok(ExtensionMode::Periodic),
            "constant" => Ok(ExtensionMode::Constant),
            "smooth" => Ok(ExtensionMode::Smooth),
            "symmetric" => Ok(ExtensionMode::Symmetric),
            _ => Err(ConvletError::UnknownExtensionMode(s.to_owned())),
        }
    }
}

/// Maps the outward distance `i` from an edge onto a cyclic index in `0..n`.
#[inline]
pub(crate) fn wrap_index(i: usize, n: usize) -> usize {
    i % n
}

/// Maps the outward distance `i` from an edge onto a mirrored index in `0..n`
/// with period `2 * n` (forward, backward, forward, …).
#[inline]
pub(crate) fn mirror_index(i: usize, n: usize) -> usize {
    let m = i % (2 * n);
    if m < n {
        m
    } else {
        2 * n - 1 - m
    }
}

/// Pads an up-sampled signal on both ends according to an extension policy.
///
/// Allocates a zeroed buffer of `a.len() * upsampling + leading + trailing`
/// slots and copies the up-sampled signal verbatim into
/// `[leading, len - trailing)`. Padding slots are then filled on the same
/// stride as the sample grid, so fill slots sit exactly where original
/// samples would land if the signal continued outward; the structural zeros
/// of up-sampling stay zero in the padding zones as well.
///
/// # Parameters
/// - `a`: Signal (or filter) being extended.
/// - `padding`: `(leading, trailing)` pad sizes in output-buffer slots.
/// - `upsampling`: Up-sampling factor applied to `a` before placement,
///   must be at least 1.
/// - `mode`: Fill policy for the two padding zones.
///
/// # Returns
/// The freshly allocated extended buffer, or `ConvletError::OutOfMemory` if
/// the allocation fails.
pub fn edge_extend<T: ConvSample>(
    a: &[T],
    padding: (usize, usize),
    upsampling: usize,
    mode: ExtensionMode,
) -> Result<Vec<T>, ConvletError>
where
    f64: AsPrimitive<T>,
{
    debug_assert!(upsampling >= 1, "up-sampling factor must be at least 1");
    let (leading, trailing) = padding;
    let total = a.len() * upsampling + leading + trailing;
    let mut padded = try_vec![T::default(); total];

    for (i, src) in a.iter().enumerate() {
        padded[leading + i * upsampling] = *src;
    }

    if a.is_empty() {
        return Ok(padded);
    }

    let n = a.len();
    // Leading fill slots sit at `upsampling-1, 2*upsampling-1, …` below
    // `leading`; trailing slots at `total-trailing, total-trailing+upsampling, …`.
    let lead_slots = (leading + 1).saturating_sub(upsampling).div_ceil(upsampling);
    let trail_slots = trailing.div_ceil(upsampling);
    // Outward slot distance m maps to buffer positions:
    let lead_pos = |m: usize| upsampling - 1 + (lead_slots - 1 - m) * upsampling;
    let trail_pos = |m: usize| total - trailing + m * upsampling;

    match mode {
        ExtensionMode::ZeroPad => {}
        ExtensionMode::Periodic => {
            for m in 0..lead_slots {
                padded[lead_pos(m)] = a[n - 1 - wrap_index(m, n)];
            }
            for m in 0..trail_slots {
                padded[trail_pos(m)] = a[wrap_index(m, n)];
            }
        }
        ExtensionMode::Constant => {
            let first = a[0];
            let last = a[n - 1];
            for m in 0..lead_slots {
                padded[lead_pos(m)] = first;
            }
            for m in 0..trail_slots {
                padded[trail_pos(m)] = last;
            }
        }
        ExtensionMode::Smooth => {
            let lead_slope = if n > 1 { a[0] - a[1] } else { T::default() };
            let trail_slope = if n > 1 { a[n - 1] - a[n - 2] } else { T::default() };
            for m in 0..lead_slots {
                let k: T = ((m + 1) as f64).as_();
                padded[lead_pos(m)] = a[0] + k * lead_slope;
            }
            for m in 0..trail_slots {
                let k: T = ((m + 1) as f64).as_();
                padded[trail_pos(m)] = a[n - 1] + k * trail_slope;
            }
        }
        ExtensionMode::Symmetric => {
            for m in 0..lead_slots {
                padded[lead_pos(m)] = a[mirror_index(m, n)];
            }
            for m in 0..trail_slots {
                padded[trail_pos(m)] = a[n - 1 - mirror_index(m, n)];
            }
        }
    }
    Ok(padded)
}
