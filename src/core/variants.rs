//! Variant generator
//!
//! Turns a single name into an ordered list of password candidates by
//! combining seven case/reversal base forms with a fixed suffix table.

/// Suffixes appended to every base form, in emission order
pub const SUFFIXES: &[&str] = &["", "123", "1234", "2024", "@123", "!", "01", "321", "@", "#"];

/// The seven base forms derived from a name, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseForm {
    Original,
    Lower,
    Capitalized,
    Upper,
    ReversedOriginal,
    ReversedLower,
    ReversedCapitalized,
}

pub const BASE_FORMS: &[BaseForm] = &[
    BaseForm::Original,
    BaseForm::Lower,
    BaseForm::Capitalized,
    BaseForm::Upper,
    BaseForm::ReversedOriginal,
    BaseForm::ReversedLower,
    BaseForm::ReversedCapitalized,
];

/// Extra entries emitted per base after the suffixes: `base@base` and `base + reverse(base)`
const COMBINED_PER_BASE: usize = 2;

impl BaseForm {
    pub fn apply(self, name: &str) -> String {
        match self {
            BaseForm::Original => name.to_string(),
            BaseForm::Lower => name.to_lowercase(),
            BaseForm::Capitalized => capitalize(name),
            BaseForm::Upper => name.to_uppercase(),
            BaseForm::ReversedOriginal => reverse(name),
            BaseForm::ReversedLower => reverse(&name.to_lowercase()),
            BaseForm::ReversedCapitalized => reverse(&capitalize(name)),
        }
    }
}

/// First character uppercased, every other character lowercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
    }
}

pub fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

/// Number of candidates produced for any one name
pub const fn variant_count() -> usize {
    BASE_FORMS.len() * (SUFFIXES.len() + COMBINED_PER_BASE)
}

/// Generates every candidate for `name`, duplicates included.
pub fn generate(name: &str) -> Vec<String> {
    let mut variants = Vec::with_capacity(variant_count());

    for form in BASE_FORMS {
        let base = form.apply(name);

        for suffix in SUFFIXES {
            variants.push(format!("{}{}", base, suffix));
        }
        variants.push(format!("{}@{}", base, base));
        variants.push(format!("{}{}", base, reverse(&base)));
    }

    variants
}
