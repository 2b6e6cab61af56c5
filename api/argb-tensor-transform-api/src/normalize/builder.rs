//! Builder pattern implementation for ARGB normalization configuration.

use crate::error::ArgbTensorError;
use crate::layout::TensorLayout;
use crate::normalize::normalize_argb;

/// ARGB normalization configuration builder.
///
/// Holds the output layout for repeated per-frame conversions, so a capture
/// loop configures once and converts every frame with the same settings.
#[derive(Debug, Clone, Copy)]
pub struct ArgbNormalizeBuilder {
    layout: Option<TensorLayout>,
}

impl ArgbNormalizeBuilder {
    /// Create a new normalization builder.
    pub fn new() -> Self {
        Self { layout: None }
    }

    /// Set the destination tensor layout.
    ///
    /// Defaults to [`TensorLayout::Interleaved`], the arrangement TFLite-style
    /// interpreters consume.
    pub fn layout(mut self, layout: TensorLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Convert one frame of packed ARGB pixels using the configured settings.
    ///
    /// # Parameters
    /// - `source`: The packed ARGB pixels, row-major, exactly `width * height` long
    /// - `destination`: The output buffer, at least `width * height * 3` floats
    /// - `width`: Frame width in pixels
    /// - `height`: Frame height in pixels
    ///
    /// # Returns
    /// Ok(()) on success, or an error on failure.
    ///
    /// # Errors
    /// Returns [`ArgbTensorError`] if the buffer lengths do not match the
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use argb_tensor_transform_api::{ArgbNormalizeBuilder, TensorLayout};
    ///
    /// # fn main() -> Result<(), argb_tensor_transform_api::ArgbTensorError> {
    /// let pixels = [0xFF00_00FFu32; 6]; // 3x2 frame, pure blue
    /// let mut tensor = [0.0f32; 18];
    ///
    /// let builder = ArgbNormalizeBuilder::new().layout(TensorLayout::Planar);
    /// builder.normalize(&pixels, &mut tensor, 3, 2)?;
    ///
    /// assert_eq!(tensor[0..6], [0.0; 6]);  // red plane
    /// assert_eq!(tensor[12..18], [1.0; 6]); // blue plane
    /// # Ok(())
    /// # }
    /// ```
    pub fn normalize(
        &self,
        source: &[u32],
        destination: &mut [f32],
        width: u32,
        height: u32,
    ) -> Result<(), ArgbTensorError> {
        normalize_argb(
            source,
            destination,
            width,
            height,
            self.layout.unwrap_or_default(),
        )
    }
}

impl Default for ArgbNormalizeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn builder_defaults_to_interleaved() {
        let pixels = [0xFFFF_0000u32, 0xFF00_FF00];
        let mut tensor = [0.0f32; 6];

        ArgbNormalizeBuilder::new()
            .normalize(&pixels, &mut tensor, 2, 1)
            .unwrap();

        assert_eq!(tensor, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn builder_applies_configured_layout() {
        let pixels = [0xFFFF_0000u32, 0xFF00_FF00];
        let mut tensor = [0.0f32; 6];

        ArgbNormalizeBuilder::new()
            .layout(TensorLayout::Planar)
            .normalize(&pixels, &mut tensor, 2, 1)
            .unwrap();

        assert_eq!(tensor, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn builder_propagates_validation_errors() {
        let pixels = [0u32; 2];
        let mut tensor = [0.0f32; 1];

        let result = ArgbNormalizeBuilder::new().normalize(&pixels, &mut tensor, 2, 1);
        assert!(matches!(
            result,
            Err(ArgbTensorError::OutputBufferTooSmall { .. })
        ));
    }
}
