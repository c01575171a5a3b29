use filtra_image::{Image, ImageError};
use num_traits::Float;

use crate::parallel;

/// Scale the brightness of an image by a constant factor.
///
/// The formula used is:
///
/// dst(x,y,c) = src(x,y,c) * factor
///
/// A factor below one darkens, above one brightens and exactly one is the
/// identity. The output is not clamped to any displayable range; quantization
/// is the responsibility of the encoder.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `factor` - The multiplier applied to every sample.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn brighten<T, const C: usize>(
    src: &Image<T, C>,
    factor: T,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_sample, dst_sample| {
        *dst_sample = src_sample * factor;
    });

    Ok(())
}

/// Adjust the contrast of an image around a midpoint.
///
/// The formula used is:
///
/// dst(x,y,c) = (src(x,y,c) - mid) * factor + mid
///
/// A factor above one amplifies the distance from `mid`, below one compresses
/// it and a negative factor inverts around `mid`. `mid` is typically the
/// midpoint of the valid sample range but any real value is accepted.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `factor` - The contrast factor.
/// * `mid` - The midpoint the contrast is stretched around.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn adjust_contrast<T, const C: usize>(
    src: &Image<T, C>,
    factor: T,
    mid: T,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_sample, dst_sample| {
        *dst_sample = (src_sample - mid) * factor + mid;
    });

    Ok(())
}

/// Combine two same-sized images into their per-sample Euclidean magnitude.
///
/// The formula used is:
///
/// dst(x,y,c) = sqrt(src1(x,y,c)^2 + src2(x,y,c)^2)
///
/// This is the magnitude combination used to merge two directional gradient
/// images into a single edge response.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
/// Returns an error if the size of `dst` does not match the size of `src1`.
pub fn combine<T, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if src1.size() != src2.size() {
        return Err(ImageError::ShapeMismatch(
            src1.width(),
            src1.height(),
            src2.width(),
            src2.height(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::ShapeMismatch(
            src1.width(),
            src1.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val_two(src1, src2, dst, |&src1_sample, &src2_sample, dst_sample| {
        *dst_sample = (src1_sample * src1_sample + src2_sample * src2_sample).sqrt();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use filtra_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_brighten_identity() -> Result<(), ImageError> {
        let src_data = vec![0.0f32, 0.25, 0.5, 2.0];
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            src_data.clone(),
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        super::brighten(&src, 1.0, &mut dst)?;
        assert_eq!(dst.as_slice(), src_data.as_slice());

        Ok(())
    }

    #[test]
    fn test_brighten_scales_exactly() -> Result<(), ImageError> {
        let src = Image::<f32, 2>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0.0, 0.5, 1.0, 2.0],
        )?;
        let mut dst = Image::<f32, 2>::from_size_val(src.size(), 0.0)?;

        super::brighten(&src, 1.9, &mut dst)?;

        dst.as_slice()
            .iter()
            .zip(src.as_slice().iter())
            .for_each(|(&d, &s)| {
                assert_eq!(d, s * 1.9);
            });

        Ok(())
    }

    #[test]
    fn test_brighten_no_clamping() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.5, 1.0],
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        super::brighten(&src, 4.0, &mut dst)?;
        assert_eq!(dst.as_slice(), &[2.0, 4.0]);

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_identity_and_collapse() -> Result<(), ImageError> {
        let src_data = vec![0.1f32, 0.4, 0.6, 0.9];
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            src_data.clone(),
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        // factor 1 round-trips through (x - mid) * 1 + mid, so compare with
        // a tolerance rather than bitwise
        super::adjust_contrast(&src, 1.0, 0.5, &mut dst)?;
        dst.as_slice()
            .iter()
            .zip(src_data.iter())
            .for_each(|(&d, &s)| {
                assert!((d - s).abs() < 1e-6);
            });

        super::adjust_contrast(&src, 0.0, 0.5, &mut dst)?;
        assert!(dst.as_slice().iter().all(|&x| x == 0.5));

        Ok(())
    }

    #[test]
    fn test_adjust_contrast_stretch() -> Result<(), ImageError> {
        let src = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.25, 0.75],
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        super::adjust_contrast(&src, 2.0, 0.5, &mut dst)?;
        assert_eq!(dst.as_slice(), &[0.0, 1.0]);

        Ok(())
    }

    #[test]
    fn test_combine_symmetric() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1.0, -2.0, 3.0, 0.0],
        )?;
        let b = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![4.0, 0.5, -1.0, 0.0],
        )?;

        let mut ab = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;
        let mut ba = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        super::combine(&a, &b, &mut ab)?;
        super::combine(&b, &a, &mut ba)?;

        assert_eq!(ab.as_slice(), ba.as_slice());

        Ok(())
    }

    #[test]
    fn test_combine_with_self() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![3.0, 5.0],
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        super::combine(&a, &a, &mut dst)?;

        dst.as_slice()
            .iter()
            .zip(a.as_slice().iter())
            .for_each(|(&d, &s)| {
                assert!((d - s * 2.0f32.sqrt()).abs() < 1e-6);
            });

        Ok(())
    }

    #[test]
    fn test_combine_shape_mismatch() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let b = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        let res = super::combine(&a, &b, &mut dst);
        assert_eq!(res.err(), Some(ImageError::ShapeMismatch(2, 2, 3, 2)));

        Ok(())
    }
}
