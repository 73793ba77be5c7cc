use std::fmt;

use crate::errors::GenerationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocaleKey {
    #[default]
    EnUs,
    PtBr,
}

impl LocaleKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en_US" | "en-US" | "en" => Some(Self::EnUs),
            "pt_BR" | "pt-BR" | "pt" => Some(Self::PtBr),
            _ => None,
        }
    }

    pub fn resolve(value: &str) -> Result<Self, GenerationError> {
        Self::parse(value).ok_or_else(|| {
            GenerationError::InvalidOptions(format!("unsupported faker locale '{value}'"))
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::PtBr => "pt_BR",
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
