use serde::Serialize;

/// The three activity kinds a prompt can belong to.
/// Each kind maps to one sheet of the workbook and decides how the
/// free-text payload column is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    ImageAnalysis,   // vision
    TextGeneration,  // text
    ImageGeneration, // image
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::ImageAnalysis,
        ActivityKind::TextGeneration,
        ActivityKind::ImageGeneration,
    ];

    /// Sheet name inside the workbook
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ActivityKind::ImageAnalysis => "vision",
            ActivityKind::TextGeneration => "text",
            ActivityKind::ImageGeneration => "image",
        }
    }

    /// Header name of the free-text payload column.
    /// The two prompt sheets store a `prompt`; the image sheet stores the
    /// subject the picture should depict.
    pub fn payload_field(&self) -> &'static str {
        match self {
            ActivityKind::ImageGeneration => "image_subject",
            _ => "prompt",
        }
    }

    /// Column headers, in append order.
    pub fn header(&self) -> [&'static str; 5] {
        ["timestamp", "activity_code", self.payload_field(), "email", "password"]
    }

    /// Human readable label for messages
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::ImageAnalysis => "image analysis",
            ActivityKind::TextGeneration => "text generation",
            ActivityKind::ImageGeneration => "image generation",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "vision" => Some(ActivityKind::ImageAnalysis),
            "text" => Some(ActivityKind::TextGeneration),
            "image" => Some(ActivityKind::ImageGeneration),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_round_trip() {
        for kind in ActivityKind::ALL {
            assert_eq!(ActivityKind::from_code(kind.sheet_name()), Some(kind));
        }
        assert_eq!(ActivityKind::from_code("VISION"), Some(ActivityKind::ImageAnalysis));
        assert_eq!(ActivityKind::from_code("drawing"), None);
    }

    #[test]
    fn image_sheet_stores_a_subject() {
        assert_eq!(ActivityKind::ImageGeneration.payload_field(), "image_subject");
        assert_eq!(ActivityKind::TextGeneration.payload_field(), "prompt");
        assert_eq!(ActivityKind::ImageAnalysis.header()[2], "prompt");
    }
}
