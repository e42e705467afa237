//! Decorative backdrop selection from the condition label.

const CLEAR_URL: &str =
    "https://images.unsplash.com/photo-1501973801540-537f08ccae7b?auto=format&fit=crop&w=1600&q=80";
const CLOUDS_URL: &str =
    "https://images.unsplash.com/photo-1501630834273-4b5604d2ee31?auto=format&fit=crop&w=1600&q=80";
const RAIN_URL: &str =
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=1600&q=80";
const THUNDERSTORM_URL: &str =
    "https://images.unsplash.com/photo-1500674425229-f692875b0ab7?auto=format&fit=crop&w=1600&q=80";
const SNOW_URL: &str =
    "https://images.unsplash.com/photo-1608889177853-45e6b6e94c66?auto=format&fit=crop&w=1600&q=80";
const FALLBACK_GRADIENT: &str = "linear-gradient(to right, #4facfe, #00f2fe)";

/// Background image for a condition: a photo for the known labels, a
/// gradient for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropImage {
    Url(&'static str),
    Gradient(&'static str),
}

/// Full background style applied alongside the weather panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub image: BackdropImage,
    pub size: &'static str,
    pub position: &'static str,
    pub transition: &'static str,
}

impl Backdrop {
    fn with_image(image: BackdropImage) -> Self {
        Self {
            image,
            size: "cover",
            position: "center",
            transition: "background 0.5s ease-in-out",
        }
    }

    /// The `background-image` value: `url('...')` or the gradient itself.
    pub fn image_css(&self) -> String {
        match self.image {
            BackdropImage::Url(url) => format!("url('{}')", url),
            BackdropImage::Gradient(gradient) => gradient.to_string(),
        }
    }
}

/// Map a condition label to a backdrop, case-insensitively.
///
/// Recognized labels: clear, clouds, rain, drizzle, thunderstorm, snow.
/// Anything else gets the gradient fallback.
pub fn select_backdrop(condition: &str) -> Backdrop {
    let image = match condition.to_ascii_lowercase().as_str() {
        "clear" => BackdropImage::Url(CLEAR_URL),
        "clouds" => BackdropImage::Url(CLOUDS_URL),
        "rain" | "drizzle" => BackdropImage::Url(RAIN_URL),
        "thunderstorm" => BackdropImage::Url(THUNDERSTORM_URL),
        "snow" => BackdropImage::Url(SNOW_URL),
        _ => BackdropImage::Gradient(FALLBACK_GRADIENT),
    };
    Backdrop::with_image(image)
}
