//! Pipeline error types.

use arcglobe_color::ColorError;

/// Errors raised while configuring the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A surface material color in the globe config is not a hex color.
    #[error("globe config `{field}` is not usable: {source}")]
    InvalidMaterialColor {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}
