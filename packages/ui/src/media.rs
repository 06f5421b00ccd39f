//! Access to the device's image library for avatar selection.

use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// How the picker should shape the chosen image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickOptions {
    /// Crop to the largest centered square.
    pub square_crop: bool,
    /// Encoder quality in `0.0..=1.0`.
    pub quality: f32,
}

impl PickOptions {
    /// Square crop at full quality, used for avatars.
    pub fn square() -> Self {
        Self {
            square_crop: true,
            quality: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PickResult {
    pub canceled: bool,
    #[serde(default, rename = "uri")]
    pub selected_uri: Option<String>,
}

impl PickResult {
    pub fn canceled() -> Self {
        Self {
            canceled: true,
            selected_uri: None,
        }
    }

    pub fn selected(uri: impl Into<String>) -> Self {
        Self {
            canceled: false,
            selected_uri: Some(uri.into()),
        }
    }
}

/// Async interface to the host's media library.
pub trait MediaLibrary {
    fn request_permission(&self) -> impl std::future::Future<Output = Permission>;
    fn pick_image(
        &self,
        options: PickOptions,
    ) -> impl std::future::Future<Output = PickResult>;
}

const PERMISSION_JS: &str = r#"
dioxus.send(typeof FileReader === "undefined" ? "denied" : "granted");
"#;

// Expects `square` and `quality` to be defined ahead of it.
const PICK_JS: &str = r#"
const input = document.createElement("input");
input.type = "file";
input.accept = "image/*";
input.addEventListener("cancel", () => dioxus.send({ canceled: true }));
input.addEventListener("change", () => {
  const file = input.files && input.files[0];
  if (!file) {
    dioxus.send({ canceled: true });
    return;
  }
  const reader = new FileReader();
  reader.onerror = () => dioxus.send({ canceled: true });
  reader.onload = () => {
    const img = new Image();
    img.onerror = () => dioxus.send({ canceled: true });
    img.onload = () => {
      const side = Math.min(img.width, img.height);
      const w = square ? side : img.width;
      const h = square ? side : img.height;
      const canvas = document.createElement("canvas");
      canvas.width = w;
      canvas.height = h;
      canvas
        .getContext("2d")
        .drawImage(img, (img.width - w) / 2, (img.height - h) / 2, w, h, 0, 0, w, h);
      dioxus.send({ canceled: false, uri: canvas.toDataURL("image/jpeg", quality) });
    };
    img.src = reader.result;
  };
  reader.readAsDataURL(file);
});
input.click();
"#;

/// Media library backed by the app's webview.
///
/// The system chooser is opened through a transient file input. The chosen
/// image is cropped on a canvas and handed back as a data URI, which doubles
/// as the local reference stored in the profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewMediaLibrary;

impl MediaLibrary for WebviewMediaLibrary {
    async fn request_permission(&self) -> Permission {
        let mut eval = document::eval(PERMISSION_JS);
        match eval.recv::<String>().await {
            Ok(answer) if answer == "granted" => Permission::Granted,
            Ok(_) => Permission::Denied,
            Err(e) => {
                tracing::warn!("media permission probe failed: {e:?}");
                Permission::Denied
            }
        }
    }

    async fn pick_image(&self, options: PickOptions) -> PickResult {
        let script = format!(
            "const square = {};\nconst quality = {};\n{PICK_JS}",
            options.square_crop,
            options.quality.clamp(0.0, 1.0),
        );
        let mut eval = document::eval(&script);
        match eval.recv::<PickResult>().await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("image picker failed: {e:?}");
                PickResult::canceled()
            }
        }
    }
}
