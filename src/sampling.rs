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
use crate::ConvSample;

/// Inserts structural zeros between consecutive samples.
///
/// Sample `i` of the input lands at output index `i * step`; every other slot
/// is zero. The result has length `a.len() * step`. `step == 1` yields a
/// plain copy.
///
/// # Parameters
/// - `a`: Input samples.
/// - `step`: Up-sampling factor, must be at least 1.
pub fn upsample<T: ConvSample>(a: &[T], step: usize) -> Vec<T> {
    debug_assert!(step >= 1, "up-sampling step must be at least 1");
    let mut r = vec![T::default(); a.len() * step];
    for (dst, src) in r.iter_mut().step_by(step).zip(a.iter()) {
        *dst = *src;
    }
    r
}

/// Selects the last sample of each consecutive block of `step` samples.
///
/// Equivalent to taking indices `step-1, 2*step-1, 3*step-1, …`, the exact
/// inverse of [`upsample`] on the sample grid. `step == 1` yields a plain
/// copy.
///
/// # Parameters
/// - `a`: Input samples.
/// - `step`: Down-sampling factor, must be at least 1.
pub fn downsample<T: ConvSample>(a: &[T], step: usize) -> Vec<T> {
    debug_assert!(step >= 1, "down-sampling step must be at least 1");
    a.iter().skip(step - 1).step_by(step).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsample_layout() {
        let a = [1.0f64, 2.0, 3.0];
        assert_eq!(upsample(&a, 1), vec![1.0, 2.0, 3.0]);
        assert_eq!(upsample(&a, 2), vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
        assert_eq!(
            upsample(&a, 3),
            vec![1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_downsample_picks_block_tail() {
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(downsample(&a, 1), a.to_vec());
        assert_eq!(downsample(&a, 2), vec![2.0, 4.0, 6.0]);
        assert_eq!(downsample(&a, 3), vec![3.0, 6.0]);
        assert_eq!(downsample(&a, 4), vec![4.0]);
        assert_eq!(downsample(&a, 7), Vec::<f32>::new());
    }

    #[test]
    fn test_identity_laws() {
        let a = [0.5f64, -1.0, 2.25, 7.0, 0.0, 3.5, -4.125];
        assert_eq!(upsample(&a, 1), a.to_vec());
        assert_eq!(downsample(&a, 1), a.to_vec());
        assert_eq!(downsample(&upsample(&a, 1), 1), a.to_vec());
    }

    #[test]
    fn test_sample_grid() {
        // Original samples stay recoverable from the up-sampled grid.
        let a = [0.5f64, -1.0, 2.25, 7.0, 0.0, 3.5, -4.125];
        for step in 1..6 {
            let up = upsample(&a, step);
            for (i, src) in a.iter().enumerate() {
                assert_eq!(up[i * step], *src);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(upsample::<f64>(&[], 3).is_empty());
        assert!(downsample::<f64>(&[], 3).is_empty());
    }
}
