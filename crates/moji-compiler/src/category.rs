//! Pattern categories.

use std::fmt;

/// A named bucket of sequences that compiles into one fragment.
///
/// Declaration order is precedence order in the master pattern: longer and
/// more specific shapes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    MultiDiversity,
    /// Residue after `PERSON ZWJ`, e.g. `1f4bb` of "person technologist".
    ZwjLeadingGender,
    /// Base before `VS16 ZWJ MALE-SIGN VS16`.
    ZwjTrailingGenderWithVariant,
    /// Base before `ZWJ MALE-SIGN VS16`.
    ZwjTrailingGenderWithoutVariant,
    Zwj,
    /// Keycap bases with `20e3` stripped.
    Keycap,
    VariantDiversity,
    Diversity,
    TextDefault,
    Variant,
    /// Flags, regional indicators and plain emoji.
    Normal,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::MultiDiversity,
        Category::ZwjLeadingGender,
        Category::ZwjTrailingGenderWithVariant,
        Category::ZwjTrailingGenderWithoutVariant,
        Category::Zwj,
        Category::Keycap,
        Category::VariantDiversity,
        Category::Diversity,
        Category::TextDefault,
        Category::Variant,
        Category::Normal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MultiDiversity => "multi-diversity",
            Self::ZwjLeadingGender => "zwj-leading-gender",
            Self::ZwjTrailingGenderWithVariant => "zwj-trailing-gender-with-variant",
            Self::ZwjTrailingGenderWithoutVariant => "zwj-trailing-gender-without-variant",
            Self::Zwj => "zwj",
            Self::Keycap => "keycap",
            Self::VariantDiversity => "variant-diversity",
            Self::Diversity => "diversity",
            Self::TextDefault => "text-default",
            Self::Variant => "variant",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
