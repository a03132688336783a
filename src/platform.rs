/// The fixed set of web destinations the launcher can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Google,
    Wikipedia,
    WhatsApp,
    GitHub,
    Instagram,
}

impl Platform {
    /// Display order of the button grid (2 columns, row by row).
    pub const ALL: [Platform; 6] = [
        Platform::YouTube,
        Platform::Google,
        Platform::Wikipedia,
        Platform::WhatsApp,
        Platform::GitHub,
        Platform::Instagram,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Google => "Google",
            Platform::Wikipedia => "Wikipedia",
            Platform::WhatsApp => "WhatsApp",
            Platform::GitHub => "GitHub",
            Platform::Instagram => "Instagram",
        }
    }

    /// Landing page opened when the query is empty.
    pub fn home_url(&self) -> &'static str {
        match self {
            Platform::YouTube => "https://www.youtube.com/",
            Platform::Google => "https://www.google.com/",
            Platform::Wikipedia => "https://en.wikipedia.org/",
            Platform::WhatsApp => "https://web.whatsapp.com/",
            Platform::GitHub => "https://github.com/",
            Platform::Instagram => "https://www.instagram.com/",
        }
    }

    /// Button background color.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Platform::YouTube => "#f94144",
            Platform::Google => "#4da8da",
            Platform::Wikipedia => "#2b9348",
            Platform::WhatsApp => "#40916c",
            Platform::GitHub => "#2d6a4f",
            Platform::Instagram => "#7b2cbf",
        }
    }

    /// Icon file looked up under the configured icon directory.
    pub fn icon_file(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube.png",
            Platform::Google => "google.png",
            Platform::Wikipedia => "wikipedia.png",
            Platform::WhatsApp => "whatsapp.png",
            Platform::GitHub => "github.png",
            Platform::Instagram => "instagram.png",
        }
    }

    /// CSS class carried by this platform's button.
    pub fn css_class(&self) -> &'static str {
        match self {
            Platform::YouTube => "platform-youtube",
            Platform::Google => "platform-google",
            Platform::Wikipedia => "platform-wikipedia",
            Platform::WhatsApp => "platform-whatsapp",
            Platform::GitHub => "platform-github",
            Platform::Instagram => "platform-instagram",
        }
    }
}
