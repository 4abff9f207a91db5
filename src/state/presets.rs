/// Built-in prompt presets
///
/// Selecting a preset only fills the prompt input; it never submits.

/// Icon shown on a preset chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    Camera,
    Film,
    Zap,
    PenTool,
}

impl IconKey {
    /// Glyph rendered in front of the chip label
    pub fn glyph(self) -> &'static str {
        match self {
            IconKey::Camera => "📷",
            IconKey::Film => "🎞",
            IconKey::Zap => "⚡",
            IconKey::PenTool => "✏",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetPrompt {
    pub label: &'static str,
    pub prompt: &'static str,
    pub icon: IconKey,
}

pub const PRESET_PROMPTS: [PresetPrompt; 4] = [
    PresetPrompt {
        label: "Game to Realism",
        prompt: "Transform this game screenshot into a highly detailed, photorealistic real-life photograph. 8k resolution, cinematic lighting, ultra-realistic textures.",
        icon: IconKey::Camera,
    },
    PresetPrompt {
        label: "Retro Filter",
        prompt: "Apply a vintage 1980s retro film filter to this image, adding grain and color grading.",
        icon: IconKey::Film,
    },
    PresetPrompt {
        label: "Cyberpunk",
        prompt: "Transform this image into a cyberpunk style with neon lights, rain, and high contrast futuristic elements.",
        icon: IconKey::Zap,
    },
    PresetPrompt {
        label: "Sketch",
        prompt: "Convert this image into a detailed pencil sketch drawing.",
        icon: IconKey::PenTool,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_has_its_own_icon() {
        for (i, a) in PRESET_PROMPTS.iter().enumerate() {
            for b in &PRESET_PROMPTS[i + 1..] {
                assert_ne!(a.icon.glyph(), b.icon.glyph());
            }
        }
    }

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(PRESET_PROMPTS.len(), 4);
        for preset in PRESET_PROMPTS {
            assert!(!preset.label.is_empty());
            assert!(!preset.prompt.trim().is_empty());
        }
    }
}
