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
use crate::unified::Resampling;
use crate::ConvSample;
use std::fmt::Write;

/// Computes the output length of
/// [`unified_convolution`](crate::unified_convolution) without running it.
///
/// # Parameters
/// - `input_len`: Length of the input signal, must be at least 1.
/// - `filter_len`: Length of the filter before up-sampling, must be at least 1.
/// - `resampling`: Sampling factors, all at least 1.
#[inline]
pub fn unified_length(input_len: usize, filter_len: usize, resampling: Resampling) -> usize {
    debug_assert!(input_len >= 1 && filter_len >= 1);
    let filter_len = filter_len * resampling.filter_upsampling;
    let extended = input_len * resampling.input_upsampling
        + (filter_len - 1)
        + filter_len.saturating_sub(resampling.input_upsampling);
    let valid = extended - filter_len + 1;
    valid / resampling.output_downsampling
}

/// Formats a sequence as fixed-width two-decimal fields separated by spaces,
/// e.g. `[1.0, 2.0]` becomes `" 1.00  2.00 "`.
pub fn format_sequence<T: ConvSample>(a: &[T]) -> String {
    let mut formatted = String::new();
    for value in a {
        let _ = write!(formatted, "{value:>5.2} ");
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[1.0f64, 2.0]), " 1.00  2.00 ");
        assert_eq!(format_sequence(&[-1.5f32, 12.25]), "-1.50 12.25 ");
        assert_eq!(format_sequence::<f64>(&[]), "");
    }

    #[test]
    fn test_unified_length_defaults() {
        // All factors at one: the full convolution length n + m - 1.
        assert_eq!(unified_length(12, 6, Resampling::default()), 17);
        assert_eq!(unified_length(1, 1, Resampling::default()), 1);
    }

    #[test]
    fn test_unified_length_downsampled() {
        let resampling = Resampling {
            output_downsampling: 2,
            ..Default::default()
        };
        assert_eq!(unified_length(12, 6, resampling), 8);
    }
}
