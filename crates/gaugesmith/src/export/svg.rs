//! SVG export: one standalone file per layer.

mod layer;
mod markup;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use tempfile::NamedTempFile;

use gaugesmith_core::semantic::Layer;

use crate::export::{self, Exporter};

pub use layer::{SVG_NAMESPACE, compose_layer};
pub use markup::to_markup;

/// File extension of exported layers.
pub const FILE_EXTENSION: &str = "svg";

/// SVG exporter writing `<output_dir>/<layer name>.svg`.
#[derive(Debug, Clone)]
pub struct Svg {
    output_dir: PathBuf,
}

impl Svg {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The file a layer is exported to.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when the layer name cannot be used as
    /// a file stem.
    pub fn output_path(&self, layer: &Layer) -> Result<PathBuf, export::Error> {
        let name = layer.name();
        if name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0'])
        {
            return Err(export::Error::Render(format!(
                "layer name `{name}` is not a valid file name"
            )));
        }
        Ok(self
            .output_dir
            .join(format!("{name}.{FILE_EXTENSION}")))
    }

    /// Renders a layer to SVG markup.
    pub fn render_document(&self, layer: &Layer) -> String {
        let root = compose_layer(layer);
        debug!(layer = layer.name(), nodes = root.children().len(); "SVG document rendered");
        to_markup(&root)
    }

    /// Writes a document to `path`.
    ///
    /// The content goes to a temporary file in the output directory first and
    /// is then renamed over `path`, so a failed write leaves no partial file.
    pub fn write_document(&self, path: &Path, content: &str) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        info!(file_name = file_name.as_str(); "Creating SVG file");

        if let Err(err) = fs::create_dir_all(&self.output_dir) {
            error!(file_name = file_name.as_str(), err:err; "Failed to create output directory");
            return Err(export::Error::Io(err));
        }

        let mut file = match NamedTempFile::new_in(&self.output_dir) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name.as_str(), err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = file.write_all(content.as_bytes()) {
            error!(file_name = file_name.as_str(), err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        if let Err(err) = file.persist(path) {
            let err = err.error;
            error!(file_name = file_name.as_str(), err:err; "Failed to persist SVG file");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_layer(&self, layer: &Layer) -> Result<PathBuf, export::Error> {
        let path = self.output_path(layer)?;
        let content = self.render_document(layer);
        self.write_document(&path, &content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gaugesmith_core::geometry::Size;

    use super::*;

    #[test]
    fn test_export_layer_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg = Svg::new(dir.path().join("out"));
        let layer = Layer::new("speedometer", Size::new(200.0, 100.0), None, vec![]);

        let path = svg.export_layer(&layer).unwrap();

        assert_eq!(path, dir.path().join("out").join("speedometer.svg"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(content.contains(r#"viewBox="0 0 200 100""#));

        let leftovers = fs::read_dir(dir.path().join("out")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_export_layer_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg = Svg::new(dir.path());
        let path = dir.path().join("dial.svg");
        fs::write(&path, "stale").unwrap();

        let layer = Layer::new("dial", Size::new(10.0, 10.0), None, vec![]);
        svg.export_layer(&layer).unwrap();

        assert_ne!(fs::read_to_string(&path).unwrap(), "stale");
    }

    #[test]
    fn test_invalid_layer_name() {
        let svg = Svg::new(".");
        for name in ["", "..", "a/b", "a\\b"] {
            let layer = Layer::new(name, Size::new(10.0, 10.0), None, vec![]);
            let err = svg.output_path(&layer).unwrap_err();
            assert!(matches!(err, export::Error::Render(_)), "{name:?}");
        }
    }
}
