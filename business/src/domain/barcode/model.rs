use serde::{Deserialize, Serialize};

/// Retail barcode symbology, decided purely by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "UPC-A")]
    UpcA,
    #[serde(rename = "EAN-8")]
    Ean8,
    #[serde(rename = "UPC-E")]
    UpcE,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Symbology {
    /// Maps a count of digits to its symbology.
    pub fn from_digit_count(count: usize) -> Self {
        match count {
            13 => Symbology::Ean13,
            12 => Symbology::UpcA,
            8 => Symbology::Ean8,
            6 | 7 => Symbology::UpcE,
            _ => Symbology::Unknown,
        }
    }

    /// Length a normalized barcode of this symbology is padded to.
    ///
    /// UPC-E shares the 8-digit canonical width with EAN-8.
    pub fn canonical_length(&self) -> Option<usize> {
        match self {
            Symbology::Ean13 => Some(13),
            Symbology::UpcA => Some(12),
            Symbology::Ean8 | Symbology::UpcE => Some(8),
            Symbology::Unknown => None,
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "EAN-13"),
            Symbology::UpcA => write!(f, "UPC-A"),
            Symbology::Ean8 => write!(f, "EAN-8"),
            Symbology::UpcE => write!(f, "UPC-E"),
            Symbology::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for Symbology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EAN-13" => Ok(Symbology::Ean13),
            "UPC-A" => Ok(Symbology::UpcA),
            "EAN-8" => Ok(Symbology::Ean8),
            "UPC-E" => Ok(Symbology::UpcE),
            "UNKNOWN" => Ok(Symbology::Unknown),
            _ => Err(format!("Invalid symbology: {}", s)),
        }
    }
}

/// Outcome of validating a raw barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// `None` only when the input carried no digits at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Symbology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid(format: Symbology, normalized_barcode: String) -> Self {
        Self {
            is_valid: true,
            format: Some(format),
            normalized_barcode: Some(normalized_barcode),
            error: None,
        }
    }

    pub fn invalid(format: Option<Symbology>, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            format,
            normalized_barcode: None,
            error: Some(error.into()),
        }
    }
}
