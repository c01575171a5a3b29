use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use filtra_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The image is represented as a dense row-major array with shape (H, W, C),
/// where H is the height, W the width and C the number of channels carried
/// by the const generic parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major (H, W, C) order.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero, or if the length of the
    /// pixel data does not match the image size.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 || CHANNELS == 0 {
            return Err(ImageError::InvalidDimension(
                size.width,
                size.height,
                CHANNELS,
            ));
        }

        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, every sample set to `val`.
    ///
    /// `from_size_val(size, T::default())` is the zero-filled constructor.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the shape of the image as a (width, height, channels) triple.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.size.width, self.size.height, CHANNELS)
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice in row-major (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the sample value at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `c` - The channel index of the pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if any index is outside the declared extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::new(
    ///    ImageSize {
    ///       width: 2,
    ///       height: 1,
    ///    },
    ///    vec![0.0, 1.0],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get(1, 0, 0), Ok(&1.0));
    /// ```
    pub fn get(&self, x: usize, y: usize, c: usize) -> Result<&T, ImageError> {
        let offset = self.sample_offset(x, y, c)?;
        Ok(&self.data[offset])
    }

    /// Set the sample value at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if any index is outside the declared extent.
    pub fn set(&mut self, x: usize, y: usize, c: usize, val: T) -> Result<(), ImageError> {
        let offset = self.sample_offset(x, y, c)?;
        self.data[offset] = val;
        Ok(())
    }

    /// Cast the pixel data to a different type and scale it.
    ///
    /// This is the explicit coercion point between integer pixel storage as
    /// produced by a decoder and the floating-point samples the transforms
    /// operate on.
    ///
    /// # Arguments
    ///
    /// * `scale` - The scale to multiply the pixel data with.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel data cannot be cast to the new type.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{Image, ImageSize};
    ///
    /// let image_u8 = Image::<u8, 1>::new(
    ///    ImageSize {
    ///       width: 2,
    ///       height: 1,
    ///    },
    ///    vec![0u8, 255],
    /// ).unwrap();
    ///
    /// let image_f32 = image_u8.cast_and_scale::<f32>(1.0 / 255.0).unwrap();
    ///
    /// assert_eq!(image_f32.get(1, 0, 0), Ok(&1.0f32));
    /// ```
    pub fn cast_and_scale<U>(&self, scale: U) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast + std::ops::Mul<Output = U> + Copy,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| {
                let xu = U::from(x).ok_or_else(|| {
                    ImageError::CastError(std::any::type_name::<U>().to_string())
                })?;
                Ok(xu * scale)
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    // flat offset for (x, y, c), bounds-checked
    fn sample_offset(&self, x: usize, y: usize, c: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() || c >= CHANNELS {
            return Err(ImageError::OutOfRange(
                x,
                y,
                c,
                self.width(),
                self.height(),
                CHANNELS,
            ));
        }
        Ok((y * self.width() + x) * CHANNELS + c)
    }
}
