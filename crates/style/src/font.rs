use serde::{Deserialize, Serialize};

/// The two base-14 families the document model uses. Body text and
/// headings set Helvetica; inline code sets Courier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub const fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Oblique,
}

impl FontFamily {
    /// PostScript name of the base-14 variant for a weight/slant pair.
    pub const fn postscript_name(&self, weight: FontWeight, style: FontStyle) -> &'static str {
        let bold = weight.is_bold();
        let oblique = matches!(style, FontStyle::Oblique);
        match self {
            FontFamily::Helvetica => match (bold, oblique) {
                (true, true) => "Helvetica-BoldOblique",
                (true, false) => "Helvetica-Bold",
                (false, true) => "Helvetica-Oblique",
                (false, false) => "Helvetica",
            },
            FontFamily::Courier => match (bold, oblique) {
                (true, true) => "Courier-BoldOblique",
                (true, false) => "Courier-Bold",
                (false, true) => "Courier-Oblique",
                (false, false) => "Courier",
            },
        }
    }
}
