use super::ArtError;
use fast_image_resize as fir;
use image::RgbImage;

/// Area-average an RGB image down (or up) to exactly `dst_w` x `dst_h`.
pub fn resize_box(src: RgbImage, dst_w: u32, dst_h: u32) -> Result<RgbImage, ArtError> {
    if src.width() == dst_w && src.height() == dst_h {
        return Ok(src);
    }

    let (src_w, src_h) = src.dimensions();
    let src_image =
        fir::images::Image::from_vec_u8(src_w, src_h, src.into_raw(), fir::PixelType::U8x3)?;

    let mut dst_image = fir::images::Image::new(dst_w, dst_h, fir::PixelType::U8x3);
    let mut resizer = fir::Resizer::new();
    let options =
        fir::ResizeOptions::new().resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Box));
    resizer.resize(&src_image, &mut dst_image, Some(&options))?;

    RgbImage::from_raw(dst_w, dst_h, dst_image.into_vec())
        .ok_or(ArtError::ResizeOutput {
            width: dst_w,
            height: dst_h,
        })
}
