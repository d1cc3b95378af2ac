use serde::Serialize;
use std::fmt;

/// Barcode symbologies the scanner is expected to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Symbology {
    Qr,
    Ean13,
    Ean8,
    UpcA,
    UpcE,
    Code128,
    Code39,
    Code93,
    Itf14,
    Pdf417,
    Aztec,
    DataMatrix,
    /// Anything the reader reports that is not in the list above.
    Other(String),
}

impl Symbology {
    /// All symbologies a reader should be configured for.
    pub const SUPPORTED: [Symbology; 12] = [
        Symbology::Qr,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Code128,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Itf14,
        Symbology::Pdf417,
        Symbology::Aztec,
        Symbology::DataMatrix,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Symbology::Qr => "qr",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::UpcA => "upc_a",
            Symbology::UpcE => "upc_e",
            Symbology::Code128 => "code128",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::Itf14 => "itf14",
            Symbology::Pdf417 => "pdf417",
            Symbology::Aztec => "aztec",
            Symbology::DataMatrix => "datamatrix",
            Symbology::Other(name) => name,
        }
    }

    /// Parse a reader-reported type name (case-insensitive).
    /// Returns None for an empty name.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = match trimmed.to_lowercase().as_str() {
            "qr" => Symbology::Qr,
            "ean13" => Symbology::Ean13,
            "ean8" => Symbology::Ean8,
            "upc_a" => Symbology::UpcA,
            "upc_e" => Symbology::UpcE,
            "code128" => Symbology::Code128,
            "code39" => Symbology::Code39,
            "code93" => Symbology::Code93,
            "itf14" => Symbology::Itf14,
            "pdf417" => Symbology::Pdf417,
            "aztec" => Symbology::Aztec,
            "datamatrix" => Symbology::DataMatrix,
            _ => Symbology::Other(trimmed.to_string()),
        };
        Some(parsed)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Symbology::Other(_))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
