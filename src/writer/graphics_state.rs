//! Extended Graphics State (ExtGState) for transparency.
//!
//! Stroke and fill opacity cannot be set with plain content stream
//! operators; they live in an ExtGState resource selected with `gs`.

use crate::object::Object;
use std::collections::HashMap;

/// Builder for Extended Graphics State dictionaries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtGStateBuilder {
    /// Fill alpha (ca) - 0.0 to 1.0
    fill_alpha: Option<f32>,
    /// Stroke alpha (CA) - 0.0 to 1.0
    stroke_alpha: Option<f32>,
}

impl ExtGStateBuilder {
    /// Create a new ExtGState builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fill alpha (opacity for fill operations).
    ///
    /// Value should be between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Set stroke alpha (opacity for stroke operations).
    pub fn stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Set both fill and stroke alpha to the same value.
    pub fn alpha(self, alpha: f32) -> Self {
        self.fill_alpha(alpha).stroke_alpha(alpha)
    }

    /// Whether any parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.fill_alpha.is_none() && self.stroke_alpha.is_none()
    }

    /// Build the ExtGState dictionary.
    pub fn build(&self) -> Object {
        let mut dict = HashMap::new();
        dict.insert("Type".to_string(), Object::Name("ExtGState".to_string()));

        if let Some(alpha) = self.fill_alpha {
            dict.insert("ca".to_string(), Object::Real(alpha as f64));
        }
        if let Some(alpha) = self.stroke_alpha {
            dict.insert("CA".to_string(), Object::Real(alpha as f64));
        }

        Object::Dictionary(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(gs: &ExtGStateBuilder) -> HashMap<String, Object> {
        match gs.build() {
            Object::Dictionary(dict) => dict,
            other => panic!("ExtGState built as {:?}", other),
        }
    }

    #[test]
    fn test_ext_gstate_builder_alpha() {
        let gs = ExtGStateBuilder::new().fill_alpha(0.5).stroke_alpha(0.8);
        let dict = entries(&gs);

        assert_eq!(dict.get("Type"), Some(&Object::Name("ExtGState".to_string())));
        assert_eq!(dict.get("ca"), Some(&Object::Real(0.5)));
        assert!(matches!(dict.get("CA"), Some(Object::Real(v)) if (*v - 0.8).abs() < 1e-6));
    }

    #[test]
    fn test_alpha_is_clamped() {
        let gs = ExtGStateBuilder::new().stroke_alpha(1.7);
        assert_eq!(entries(&gs).get("CA"), Some(&Object::Real(1.0)));
    }

    #[test]
    fn test_stroke_only_omits_fill_alpha() {
        let gs = ExtGStateBuilder::new().stroke_alpha(0.4);
        assert!(!gs.is_empty());
        assert!(entries(&gs).get("ca").is_none());
        assert!(ExtGStateBuilder::new().is_empty());
    }

    #[test]
    fn test_equal_builders_compare_equal() {
        assert_eq!(ExtGStateBuilder::new().alpha(0.5), ExtGStateBuilder::new().alpha(0.5));
        assert_ne!(
            ExtGStateBuilder::new().stroke_alpha(0.5),
            ExtGStateBuilder::new().fill_alpha(0.5)
        );
    }
}
