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
use crate::mla::fmla;
use crate::ConvSample;

/// Valid-mode 1-D convolution: only positions where the kernel fully overlaps
/// the input contribute, giving `input.len() - kernel.len() + 1` outputs.
///
/// The kernel is applied reversed, so the operation is a true convolution
/// rather than a correlation.
pub(crate) fn convolve_valid<T: ConvSample>(input: &[T], kernel: &[T]) -> Vec<T> {
    debug_assert!(!kernel.is_empty(), "kernel must not be empty");
    debug_assert!(
        input.len() >= kernel.len(),
        "input must be at least as long as the kernel"
    );
    let taps = kernel.len();
    input
        .windows(taps)
        .map(|window| {
            let mut acc = window[0] * kernel[taps - 1];
            for (src, coeff) in window.iter().zip(kernel.iter().rev()).skip(1) {
                acc = fmla(*src, *coeff, acc);
            }
            acc
        })
        .collect()
}
