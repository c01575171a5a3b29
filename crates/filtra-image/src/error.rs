/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when an image dimension is zero at construction.
    #[error("Invalid image dimensions {0}x{1}x{2}, all must be non-zero")]
    InvalidDimension(usize, usize, usize),

    /// Error when the pixel data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a sample index is outside the declared image extent.
    #[error("Index (x: {0}, y: {1}, c: {2}) out of range for image {3}x{4}x{5}")]
    OutOfRange(usize, usize, usize, usize, usize, usize),

    /// Error when a kernel or window is not square with an odd side length.
    #[error("Invalid kernel: side length {0} with {1} weights, must be square with an odd side")]
    InvalidKernelSize(usize, usize),

    /// Error when the pixel data cannot be cast to the target type.
    #[error("Failed to cast pixel data to {0}")]
    CastError(String),

    /// Error when two images involved in one operation differ in size.
    #[error("Image shapes do not match: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}
