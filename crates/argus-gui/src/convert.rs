use argus_core::intake::ImagePreview;

/// Convert a decoded RGBA preview to an egui ColorImage.
pub fn preview_to_color_image(preview: &ImagePreview) -> egui::ColorImage {
    let pixels = preview
        .rgba
        .chunks_exact(4)
        .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();

    egui::ColorImage {
        size: [preview.width as usize, preview.height as usize],
        pixels,
        source_size: Default::default(),
    }
}
