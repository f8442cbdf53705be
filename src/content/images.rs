use std::fmt::Write as _;

use super::models::ContentImage;

/// Crop/fit behavior understood by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    Crop,
    Clip,
    Max,
}

impl FitMode {
    const fn param(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Clip => "clip",
            Self::Max => "max",
        }
    }
}

/// Pure URL construction for transformed image variants: the CDN does the
/// actual resizing, this just appends its query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageTransform {
    width: Option<u32>,
    height: Option<u32>,
    fit: Option<FitMode>,
    auto_format: bool,
}

impl ImageTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, pixels: u32) -> Self {
        self.width = Some(pixels);
        self
    }

    pub fn height(mut self, pixels: u32) -> Self {
        self.height = Some(pixels);
        self
    }

    pub fn fit(mut self, mode: FitMode) -> Self {
        self.fit = Some(mode);
        self
    }

    /// Ask the CDN to pick the best format and compression.
    pub fn auto_format(mut self) -> Self {
        self.auto_format = true;
        self
    }

    /// Card image used across listing and neighborhood grids.
    pub fn card() -> Self {
        Self::new()
            .width(600)
            .height(400)
            .fit(FitMode::Crop)
            .auto_format()
    }

    /// Full-width hero image for detail pages.
    pub fn hero() -> Self {
        Self::new()
            .width(1400)
            .height(700)
            .fit(FitMode::Crop)
            .auto_format()
    }

    /// Square portrait used for agent profiles.
    pub fn portrait() -> Self {
        Self::new()
            .width(300)
            .height(300)
            .fit(FitMode::Crop)
            .auto_format()
    }

    /// Small avatar for testimonial client photos.
    pub fn avatar() -> Self {
        Self::new()
            .width(80)
            .height(80)
            .fit(FitMode::Crop)
            .auto_format()
    }

    /// Service icon tile.
    pub fn icon() -> Self {
        Self::new()
            .width(120)
            .height(120)
            .fit(FitMode::Crop)
            .auto_format()
    }

    pub fn url_for(&self, base: &str) -> String {
        let mut url = base.to_string();
        let mut separator = if base.contains('?') { '&' } else { '?' };

        let mut push = |url: &mut String, key: &str, value: &str| {
            let _ = write!(url, "{separator}{key}={value}");
            separator = '&';
        };

        if let Some(width) = self.width {
            push(&mut url, "w", &width.to_string());
        }
        if let Some(height) = self.height {
            push(&mut url, "h", &height.to_string());
        }
        if let Some(fit) = self.fit {
            push(&mut url, "fit", fit.param());
        }
        if self.auto_format {
            push(&mut url, "auto", "format,compress");
        }

        url
    }
}

impl ContentImage {
    /// Transformed variant of this image's CDN URL.
    pub fn variant(&self, transform: ImageTransform) -> String {
        transform.url_for(&self.imgix_url)
    }
}
