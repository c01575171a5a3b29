use filtra_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use super::{kernels, Kernel};

/// Clamped window bounds around `center` with the given radius.
///
/// The window never extends past the image, so samples near the border are
/// aggregated over a smaller, asymmetric window. No padding or mirroring.
fn window_bounds(center: usize, radius: usize, len: usize) -> (usize, usize) {
    (center.saturating_sub(radius), (center + radius).min(len - 1))
}

/// Blur an image by averaging over a square window.
///
/// For every output sample the in-bounds samples of the window are summed and
/// divided by `window_size * window_size`, the nominal window area. The
/// divisor is fixed regardless of how many samples were actually in bounds,
/// so border pixels come out attenuated relative to an area-normalized
/// average. Channels are processed independently.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `window_size` - The side length of the averaging window, must be odd.
///
/// # Errors
///
/// Returns an error if `window_size` is zero or even, or if the sizes of
/// `src` and `dst` do not match.
pub fn box_blur<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    window_size: usize,
) -> Result<(), ImageError> {
    if window_size == 0 || window_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(
            window_size,
            window_size * window_size,
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let radius = window_size / 2;
    let area = (window_size * window_size) as f32;
    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let (y0, y1) = window_bounds(y, radius, rows);
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let (x0, x1) = window_bounds(x, radius, cols);
                    for (ch, dst_sample) in dst_pixel.iter_mut().enumerate() {
                        let mut sum = 0.0;
                        for yi in y0..=y1 {
                            for xi in x0..=x1 {
                                sum += src_data[(yi * cols + xi) * C + ch];
                            }
                        }
                        *dst_sample = sum / area;
                    }
                });
        });

    Ok(())
}

/// Apply an arbitrary square kernel to an image.
///
/// For every output sample the in-bounds samples of the window are multiplied
/// by the kernel cell anchored over them and summed. Kernel cells whose input
/// coordinate falls outside the image are skipped and contribute nothing.
/// The sum is not normalized and the output is not range-clamped, so the
/// output scale depends entirely on the kernel's own weight sum.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The square, odd-sided kernel to apply.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn apply_kernel<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel: &Kernel,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let radius = kernel.radius();
    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let (y0, y1) = window_bounds(y, radius, rows);
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let (x0, x1) = window_bounds(x, radius, cols);
                    for (ch, dst_sample) in dst_pixel.iter_mut().enumerate() {
                        let mut sum = 0.0;
                        for yi in y0..=y1 {
                            for xi in x0..=x1 {
                                let weight = kernel.weight(xi + radius - x, yi + radius - y);
                                sum += src_data[(yi * cols + xi) * C + ch] * weight;
                            }
                        }
                        *dst_sample = sum;
                    }
                });
        });

    Ok(())
}

/// Compute an edge response with the 3x3 Sobel operator.
///
/// Applies the Sobel kernel pair and combines the two directional gradients
/// into their per-sample Euclidean magnitude.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn sobel<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
) -> Result<(), ImageError> {
    let (kernel_x, kernel_y) = kernels::sobel_kernel_3();

    let mut gx = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    apply_kernel(src, &mut gx, &kernel_x)?;

    let mut gy = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    apply_kernel(src, &mut gy, &kernel_y)?;

    crate::enhance::combine(&gx, &gy, dst)
}
