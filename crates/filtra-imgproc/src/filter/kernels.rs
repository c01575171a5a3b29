use super::Kernel;

/// Create the classic 3x3 Sobel kernel pair.
///
/// # Returns
///
/// A tuple of (kernel_x, kernel_y), where kernel_x responds to horizontal
/// gradients (vertical edges) and kernel_y to vertical gradients.
pub fn sobel_kernel_3() -> (Kernel, Kernel) {
    #[rustfmt::skip]
    let kernel_x = Kernel {
        side: 3,
        weights: vec![
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ],
    };

    #[rustfmt::skip]
    let kernel_y = Kernel {
        side: 3,
        weights: vec![
            -1.0, -2.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  2.0,  1.0,
        ],
    };

    (kernel_x, kernel_y)
}
