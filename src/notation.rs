//! Parser for composite-particle quark-content notation.
//!
//! The grammar has three forms:
//!
//! - **Simple tuple** — a string of flavor letters, lowercase for
//!   quarks and uppercase for antiquarks, e.g. `uud` or `uD`.
//! - **Ratio superposition** — contains `/`: an equal-magnitude mixture
//!   of two quark-antiquark pairs with `√2` coefficients, e.g.
//!   `(uU-dD)/√2`. A `-` anywhere in the string negates the final
//!   pair's coefficient.
//! - **Coefficient-prefixed superposition** — terms of the form
//!   `x(content)` where `x` is a single-letter algebraic coefficient
//!   and the content holds quark-antiquark pairs, e.g. `a(uU+dD)+b(sS)`.
//!
//! Every flavor letter goes through the identifier resolver (with a
//! trailing `~` appended for antiquarks) and must land on a quark
//! record. Input matching no grammar form is a malformed-notation
//! error, never a silently empty result.

use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::quark::{
    Coefficient, QuarkContent, QuarkSuperposition, QuarkSymbol, QuarkTuple,
};

fn pair_lower_upper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[udscbt][UDSCBT]").expect("static pattern"))
}

fn pair_upper_lower() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[UDSCBT][udscbt]").expect("static pattern"))
}

fn coefficient_term() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z])\(([A-Za-z+\-]*)\)").expect("static pattern"))
}

/// Quark-antiquark pairs extracted by pattern matching: all
/// lowercase-then-uppercase pairs in string order, then all
/// uppercase-then-lowercase pairs.
fn extract_pairs(text: &str) -> Vec<&str> {
    let mut pairs: Vec<&str> = pair_lower_upper()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    pairs.extend(pair_upper_lower().find_iter(text).map(|m| m.as_str()));
    pairs
}

impl Catalog {
    /// Parses a raw quark-content string into structured quark content.
    pub fn parse_quark_content(&self, raw: &str) -> Result<QuarkContent, Error> {
        if raw.is_empty() {
            return Err(Error::malformed(raw, "empty quark notation"));
        }
        if !raw.contains('/') && !raw.contains('+') && !raw.contains('-') {
            return Ok(QuarkContent::Tuple(self.parse_tuple(raw, raw)?));
        }
        if raw.contains('/') {
            self.parse_ratio(raw)
        } else {
            self.parse_coefficient_terms(raw)
        }
    }

    fn parse_tuple(&self, letters: &str, notation: &str) -> Result<QuarkTuple, Error> {
        let mut symbols = Vec::new();
        for letter in letters.chars() {
            symbols.push(self.resolve_quark_letter(letter, notation)?);
        }
        Ok(QuarkTuple::new(symbols))
    }

    /// Resolves one notation letter to a quark identity, appending `~`
    /// for the uppercase antiquark form before resolution.
    fn resolve_quark_letter(&self, letter: char, notation: &str) -> Result<QuarkSymbol, Error> {
        let anti = letter.is_uppercase();
        let lookup = if anti {
            format!("{}~", letter.to_lowercase())
        } else {
            letter.to_string()
        };
        let id = self.resolve(lookup.as_str()).map_err(|_| {
            Error::malformed(notation, format!("'{letter}' is not a quark flavor letter"))
        })?;
        QuarkSymbol::from_id(id).ok_or_else(|| {
            Error::malformed(
                notation,
                format!("'{letter}' resolves to a non-quark particle"),
            )
        })
    }

    /// Ratio form: exactly two extracted pairs, `√2` coefficients, and
    /// the final coefficient negated when the string carries a `-`. The
    /// sign rule is only meaningful for two terms, so anything else is
    /// rejected rather than guessed at.
    fn parse_ratio(&self, raw: &str) -> Result<QuarkContent, Error> {
        let pairs = extract_pairs(raw);
        match pairs.len() {
            0 => Err(Error::malformed(raw, "no quark pairs in ratio notation")),
            2 => {
                let mut terms = Vec::with_capacity(2);
                for pair in &pairs {
                    terms.push((Coefficient::Sqrt2, self.parse_tuple(pair, raw)?));
                }
                if raw.contains('-') {
                    if let Some(last) = terms.last_mut() {
                        last.0 = Coefficient::NegSqrt2;
                    }
                }
                Ok(QuarkContent::Superposition(QuarkSuperposition::new(terms)))
            }
            n => Err(Error::malformed(
                raw,
                format!("ratio notation with {n} quark pairs is unsupported"),
            )),
        }
    }

    /// Coefficient form: `x(content)` terms, each extracted pair tagged
    /// with its enclosing term's coefficient letter.
    fn parse_coefficient_terms(&self, raw: &str) -> Result<QuarkContent, Error> {
        let mut terms = Vec::new();
        for caps in coefficient_term().captures_iter(raw) {
            let coefficient = caps[1]
                .chars()
                .next()
                .map(Coefficient::Symbol)
                .unwrap_or(Coefficient::Sqrt2);
            for pair in extract_pairs(&caps[2]) {
                terms.push((coefficient, self.parse_tuple(pair, raw)?));
            }
        }
        if terms.is_empty() {
            return Err(Error::malformed(
                raw,
                "no coefficient terms with quark pairs",
            ));
        }
        Ok(QuarkContent::Superposition(QuarkSuperposition::new(terms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quark::QuarkFlavor;

    fn catalog() -> &'static Catalog {
        Catalog::shared()
    }

    fn letters(tuple: &QuarkTuple) -> String {
        tuple.iter().map(QuarkSymbol::letter).collect()
    }

    #[test]
    fn simple_tuple_preserves_order() {
        let content = catalog().parse_quark_content("uud").unwrap();
        let tuple = content.as_tuple().expect("tuple");
        assert_eq!(letters(tuple), "uud");
        assert_eq!(tuple.charge_thirds(), 3);
    }

    #[test]
    fn uppercase_letters_are_antiquarks() {
        let content = catalog().parse_quark_content("uD").unwrap();
        let tuple = content.as_tuple().expect("tuple");
        assert_eq!(tuple.symbols()[0].flavor, QuarkFlavor::Up);
        assert!(!tuple.symbols()[0].anti);
        assert_eq!(tuple.symbols()[1].flavor, QuarkFlavor::Down);
        assert!(tuple.symbols()[1].anti);
        assert_eq!(tuple.charge_thirds(), 3);
    }

    #[test]
    fn ratio_notation_with_minus_negates_last_pair() {
        let content = catalog().parse_quark_content("(uU-dD)/√2").unwrap();
        let sup = content.as_superposition().expect("superposition");
        assert_eq!(sup.len(), 2);
        assert_eq!(sup.terms()[0].0, Coefficient::Sqrt2);
        assert_eq!(letters(&sup.terms()[0].1), "uU");
        assert_eq!(sup.terms()[1].0, Coefficient::NegSqrt2);
        assert_eq!(letters(&sup.terms()[1].1), "dD");
    }

    #[test]
    fn ratio_notation_without_minus_keeps_both_positive() {
        let content = catalog().parse_quark_content("dD/uU").unwrap();
        let sup = content.as_superposition().expect("superposition");
        assert_eq!(sup.terms()[0].0, Coefficient::Sqrt2);
        assert_eq!(sup.terms()[1].0, Coefficient::Sqrt2);
    }

    #[test]
    fn ratio_notation_matches_reversed_pairs() {
        let content = catalog().parse_quark_content("Dd/Uu").unwrap();
        let sup = content.as_superposition().expect("superposition");
        assert_eq!(letters(&sup.terms()[0].1), "Dd");
        assert_eq!(letters(&sup.terms()[1].1), "Uu");
    }

    #[test]
    fn ratio_notation_with_more_than_two_pairs_is_rejected() {
        let err = catalog().parse_quark_content("uU/dD/sS").unwrap_err();
        assert!(matches!(err, Error::MalformedNotation { .. }));
    }

    #[test]
    fn coefficient_terms_tag_each_pair() {
        let content = catalog().parse_quark_content("a(uU+dD)+b(sS)").unwrap();
        let sup = content.as_superposition().expect("superposition");
        assert_eq!(sup.len(), 3);
        assert_eq!(sup.terms()[0].0, Coefficient::Symbol('a'));
        assert_eq!(letters(&sup.terms()[0].1), "uU");
        assert_eq!(sup.terms()[1].0, Coefficient::Symbol('a'));
        assert_eq!(letters(&sup.terms()[1].1), "dD");
        assert_eq!(sup.terms()[2].0, Coefficient::Symbol('b'));
        assert_eq!(letters(&sup.terms()[2].1), "sS");
    }

    #[test]
    fn malformed_notation_is_an_error_not_empty() {
        for raw in ["", "xyz", "u+d", "???/???"] {
            let err = catalog().parse_quark_content(raw).unwrap_err();
            assert!(
                matches!(err, Error::MalformedNotation { .. }),
                "expected MalformedNotation for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn non_quark_letters_are_rejected() {
        let err = catalog().parse_quark_content("uxd").unwrap_err();
        assert!(matches!(err, Error::MalformedNotation { .. }));
    }
}
