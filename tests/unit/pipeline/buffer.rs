//! Tests for pixel buffer construction, validation and conversion

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use retrodither::DitherError;
    use retrodither::pipeline::PixelBuffer;

    // Tests a correctly sized buffer is accepted and reports its dimensions
    #[test]
    fn test_new_accepts_matching_length() {
        let buffer = PixelBuffer::new(3, 2, vec![7; 3 * 2 * 4]);

        let Ok(buffer) = buffer else {
            unreachable!("3x2 buffer with 24 bytes must be valid");
        };
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.as_raw().len(), 24);
    }

    // Tests zero dimensions fail fast instead of producing an empty buffer
    // Verified by removing the zero dimension check
    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 4, Vec::new()),
            Err(DitherError::InvalidBuffer {
                width: 0,
                height: 4,
                len: 0
            })
        ));
        assert!(matches!(
            PixelBuffer::new(4, 0, Vec::new()),
            Err(DitherError::InvalidBuffer { .. })
        ));
    }

    // Tests byte lengths that are short, long or not a multiple of four
    #[test]
    fn test_new_rejects_length_mismatch() {
        for len in [15, 17, 20, 0] {
            let result = PixelBuffer::new(2, 2, vec![0; len]);
            assert!(
                matches!(result, Err(DitherError::InvalidBuffer { len: l, .. }) if l == len),
                "length {len} should be rejected for a 2x2 buffer"
            );
        }
    }

    // Tests from_pixel fills every pixel with the same RGBA value
    #[test]
    fn test_from_pixel_fills_grid() {
        let Ok(buffer) = PixelBuffer::from_pixel(4, 3, [1, 2, 3, 4]) else {
            unreachable!("4x3 buffer must be valid");
        };

        assert_eq!(buffer.pixels().count(), 12);
        assert!(buffer.pixels().all(|p| p == [1, 2, 3, 4]));
        assert!(PixelBuffer::from_pixel(0, 3, [0; 4]).is_err());
    }

    // Tests pixel addressing follows (y * width + x) * 4 row-major layout
    // Verified by swapping x and y in the index computation
    #[test]
    fn test_pixel_row_major_layout() {
        let data: Vec<u8> = (0..24).collect();
        let Ok(buffer) = PixelBuffer::new(3, 2, data) else {
            unreachable!("3x2 buffer must be valid");
        };

        assert_eq!(buffer.pixel(0, 0), Some([0, 1, 2, 3]));
        assert_eq!(buffer.pixel(2, 0), Some([8, 9, 10, 11]));
        assert_eq!(buffer.pixel(0, 1), Some([12, 13, 14, 15]));
        assert_eq!(buffer.pixel(2, 1), Some([20, 21, 22, 23]));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    // Tests conversion to and from the image crate keeps every byte
    #[test]
    fn test_image_conversion_round_trip() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(1, 0, Rgba([10, 20, 30, 40]));
        image.put_pixel(0, 1, Rgba([50, 60, 70, 80]));

        let Ok(buffer) = PixelBuffer::try_from(image.clone()) else {
            unreachable!("2x2 image must convert");
        };
        assert_eq!(buffer.pixel(1, 0), Some([10, 20, 30, 40]));

        let Ok(back) = buffer.into_image() else {
            unreachable!("valid buffer must convert back");
        };
        assert_eq!(back, image);
    }

    // Tests an empty image is rejected on conversion
    #[test]
    fn test_empty_image_conversion_fails() {
        let image = RgbaImage::new(0, 0);
        assert!(PixelBuffer::try_from(image).is_err());
    }

    // Tests into_raw hands back the original bytes
    #[test]
    fn test_into_raw() {
        let data = vec![9, 8, 7, 6];
        let Ok(buffer) = PixelBuffer::new(1, 1, data.clone()) else {
            unreachable!("1x1 buffer must be valid");
        };
        assert_eq!(buffer.into_raw(), data);
    }
}
