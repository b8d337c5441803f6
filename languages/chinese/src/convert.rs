use cardsmith_core::ScriptConverter;
use zhconv::{Variant, zhconv};

/// Traditional to simplified conversion backed by the zhconv tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhConverter;

impl ScriptConverter for ZhConverter {
    fn to_simplified(&self, text: &str) -> String {
        zhconv(text, Variant::ZhHans)
    }
}
