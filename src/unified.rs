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
use crate::convolve1d::convolve_valid;
use crate::err::ConvletError;
use crate::extension::{edge_extend, ExtensionMode};
use crate::sampling::{downsample, upsample};
use crate::ConvSample;
use num_traits::AsPrimitive;

/// Sampling factors applied around the convolution itself.
///
/// The default leaves the signal, filter and output on their original grids.
#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct Resampling {
    /// Up-sampling factor applied to the input signal before extension.
    pub input_upsampling: usize,
    /// Down-sampling factor applied to the convolved output.
    pub output_downsampling: usize,
    /// Up-sampling factor applied to the filter.
    pub filter_upsampling: usize,
}

impl Default for Resampling {
    fn default() -> Self {
        Resampling {
            input_upsampling: 1,
            output_downsampling: 1,
            filter_upsampling: 1,
        }
    }
}

/// Generalized 1-D convolution combining resampling and edge extension.
///
/// Up-samples the filter, edge-extends the up-sampled input by
/// `(len(filter') - 1, len(filter') - input_upsampling)` slots, convolves in
/// valid mode and down-samples the result. A trailing pad that would come
/// out non-positive contributes no trailing fill slots; the buffer simply
/// ends at the last input sample.
///
/// # Parameters
/// - `input`: Input signal, must not be empty.
/// - `filter`: Convolution kernel, must not be empty.
/// - `resampling`: Sampling factors, all at least 1.
/// - `mode`: Edge extension policy for the input signal.
///
/// # Returns
/// The convolved and down-sampled sequence, or `ConvletError::OutOfMemory`
/// if a buffer allocation fails.
pub fn unified_convolution<T: ConvSample>(
    input: &[T],
    filter: &[T],
    resampling: Resampling,
    mode: ExtensionMode,
) -> Result<Vec<T>, ConvletError>
where
    f64: AsPrimitive<T>,
{
    debug_assert!(!input.is_empty(), "input must not be empty");
    debug_assert!(!filter.is_empty(), "filter must not be empty");
    debug_assert!(
        resampling.input_upsampling >= 1
            && resampling.output_downsampling >= 1
            && resampling.filter_upsampling >= 1,
        "sampling factors must be at least 1"
    );

    let filter = upsample(filter, resampling.filter_upsampling);
    let padding = (
        filter.len() - 1,
        filter.len().saturating_sub(resampling.input_upsampling),
    );
    let extended = edge_extend(input, padding, resampling.input_upsampling, mode)?;
    let convolved = convolve_valid(&extended, &filter);
    Ok(downsample(&convolved, resampling.output_downsampling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::unified_length;

    fn ramp(n: usize) -> Vec<f64> {
        (1..=n).map(|v| v as f64).collect()
    }

    #[test]
    fn test_downsampled_zero_pad_reference() {
        // Zero padding by len(filter)-1 on both sides makes the valid
        // convolution a full one, decimated by two afterwards.
        const REFERENCE: [f64; 8] = [4.0, 20.0, 56.0, 98.0, 140.0, 182.0, 184.0, 126.0];
        let out = unified_convolution(
            &ramp(12),
            &ramp(6),
            Resampling {
                output_downsampling: 2,
                ..Default::default()
            },
            ExtensionMode::ZeroPad,
        )
        .unwrap();
        assert_eq!(out, REFERENCE.to_vec());
    }

    #[test]
    fn test_upsampled_input_reference() {
        const REFERENCE: [f64; 28] = [
            1.0, 2.0, 5.0, 8.0, 14.0, 20.0, 23.0, 32.0, 32.0, 44.0, 41.0, 56.0, 50.0, 68.0, 59.0,
            80.0, 68.0, 92.0, 77.0, 104.0, 86.0, 116.0, 95.0, 128.0, 91.0, 114.0, 60.0, 72.0,
        ];
        let resampling = Resampling {
            input_upsampling: 2,
            ..Default::default()
        };
        let out = unified_convolution(&ramp(12), &ramp(6), resampling, ExtensionMode::ZeroPad)
            .unwrap();
        assert_eq!(out, REFERENCE.to_vec());
        assert_eq!(out.len(), unified_length(12, 6, resampling));
    }

    #[test]
    fn test_upsampled_filter_periodic_reference() {
        const REFERENCE: [f64; 23] = [
            121.0, 142.0, 139.0, 160.0, 145.0, 166.0, 139.0, 160.0, 121.0, 142.0, 91.0, 112.0,
            121.0, 142.0, 139.0, 160.0, 145.0, 166.0, 139.0, 160.0, 121.0, 142.0, 91.0,
        ];
        let resampling = Resampling {
            filter_upsampling: 2,
            ..Default::default()
        };
        let out = unified_convolution(&ramp(12), &ramp(6), resampling, ExtensionMode::Periodic)
            .unwrap();
        assert_eq!(out, REFERENCE.to_vec());
        assert_eq!(out.len(), unified_length(12, 6, resampling));
    }

    #[test]
    fn test_input_upsampling_exceeds_filter_length() {
        // The trailing pad formula len(filter') - input_upsampling saturates
        // at zero here, so the extension has no trailing fill slots at all.
        let resampling = Resampling {
            input_upsampling: 3,
            ..Default::default()
        };
        let out = unified_convolution(
            &ramp(12),
            &[1.0f64, 2.0],
            resampling,
            ExtensionMode::Periodic,
        )
        .unwrap();
        let expected: Vec<f64> = (1..=12)
            .flat_map(|s| [s as f64, 2.0 * s as f64, 0.0])
            .collect();
        assert_eq!(out, expected);
        assert_eq!(out.len(), unified_length(12, 2, resampling));
    }

    #[test]
    fn test_identity_resampling_matches_full_convolution() {
        // With all factors at one and zero padding, the result is the full
        // convolution of signal and filter.
        const REFERENCE: [f32; 5] = [1.0, 3.0, 5.0, 5.0, 2.0];
        let out = unified_convolution(
            &[1.0f32, 1.0, 2.0],
            &[1.0f32, 2.0, 1.0],
            Resampling::default(),
            ExtensionMode::ZeroPad,
        )
        .unwrap();
        assert_eq!(out, REFERENCE.to_vec());
    }

    #[test]
    fn test_all_modes_agree_on_core() {
        // Edge handling only differs near the boundaries; fully overlapped
        // positions must be identical across modes.
        let input = ramp(16);
        let filter = ramp(4);
        let outputs: Vec<Vec<f64>> = [
            ExtensionMode::ZeroPad,
            ExtensionMode::Periodic,
            ExtensionMode::Constant,
            ExtensionMode::Smooth,
            ExtensionMode::Symmetric,
        ]
        .iter()
        .map(|mode| {
            unified_convolution(&input, &filter, Resampling::default(), *mode).unwrap()
        })
        .collect();
        let core = filter.len() - 1;
        let reference = &outputs[0][core..outputs[0].len() - core];
        for out in outputs.iter().skip(1) {
            assert_eq!(&out[core..out.len() - core], reference);
        }
    }
}
