use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Layout variant a block is rendered with.
///
/// Stored as a bare number so persisted documents stay compatible with the
/// numeric template ids the renderer understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateType {
    #[default]
    Classic,
}

impl TemplateType {
    pub fn as_u8(self) -> u8 {
        match self {
            TemplateType::Classic => 0,
        }
    }

    pub fn from_u8(n: u8) -> Option<Self> {
        match n {
            0 => Some(TemplateType::Classic),
            _ => None,
        }
    }
}

impl Serialize for TemplateType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for TemplateType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u8::deserialize(deserializer)?;
        TemplateType::from_u8(n)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown template type {}", n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_type_serializes_as_number() {
        assert_eq!(serde_json::to_string(&TemplateType::Classic).unwrap(), "0");
        let parsed: TemplateType = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, TemplateType::Classic);
    }

    #[test]
    fn test_unknown_template_type_rejected() {
        let result: Result<TemplateType, _> = serde_json::from_str("7");
        assert!(result.unwrap_err().to_string().contains("unknown template type 7"));
    }
}
