use filtra_image::ImageError;

/// A square convolution kernel with an odd side length.
///
/// The odd side guarantees a well-defined center cell, which anchors the
/// kernel over the output pixel. Weights are stored flat in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    pub(super) side: usize,
    pub(super) weights: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel from its side length and row-major weights.
    ///
    /// # Arguments
    ///
    /// * `side` - The side length of the kernel, must be odd.
    /// * `weights` - The kernel weights, must contain `side * side` values.
    ///
    /// # Errors
    ///
    /// Returns an error if the side is zero or even, or if the number of
    /// weights does not form a square matrix of that side.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(3, vec![
    ///     -1.0, 0.0, 1.0,
    ///     -2.0, 0.0, 2.0,
    ///     -1.0, 0.0, 1.0,
    /// ]).unwrap();
    ///
    /// assert_eq!(kernel.side(), 3);
    /// assert_eq!(kernel.radius(), 1);
    /// ```
    pub fn new(side: usize, weights: Vec<f32>) -> Result<Self, ImageError> {
        if side == 0 || side % 2 == 0 || weights.len() != side * side {
            return Err(ImageError::InvalidKernelSize(side, weights.len()));
        }

        Ok(Self { side, weights })
    }

    /// Get the side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Get the radius of the kernel, the number of cells to each side of the center.
    pub fn radius(&self) -> usize {
        self.side / 2
    }

    /// Get the weight at horizontal offset `ix` and vertical offset `iy`.
    pub fn weight(&self, ix: usize, iy: usize) -> f32 {
        self.weights[iy * self.side + ix]
    }

    /// Get the kernel weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}
