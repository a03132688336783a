use crate::platform::Platform;
use gtk::prelude::*;
use gtk::{Image, Label, Widget};
use std::path::Path;

/// Build the icon widget for a platform button.
///
/// Decodes the platform's PNG from the icon directory when it exists;
/// otherwise generates a placeholder glyph from the first letter of the
/// label. The returned widget is owned by the button it is appended to, so
/// no separate image references need to be kept alive.
pub fn platform_icon(icon_dir: &Path, platform: Platform, size: i32) -> Widget {
    let path = icon_dir.join(platform.icon_file());
    if path.exists() {
        let image = Image::from_file(&path);
        image.set_pixel_size(size);
        image.add_css_class("platform-icon");
        return image.upcast();
    }

    placeholder_glyph(platform, size)
}

fn placeholder_glyph(platform: Platform, size: i32) -> Widget {
    let initial: String = platform.label().chars().take(1).collect();
    let label = Label::new(Some(&initial));
    label.set_size_request(size, size);
    label.add_css_class("icon-placeholder");
    label.upcast()
}
