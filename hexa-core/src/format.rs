//! `{}` placeholder substitution for failure messages.
//!
//! A template is first rewritten into an [`IndexedTemplate`]: every `{}`
//! token, read left to right, is bound to the next positional parameter until
//! the parameters run out. Rendering then substitutes the bound parameters.
//! Tokens left without a parameter stay literal, surplus parameters are
//! ignored, and any other brace text (`{0}`, `{name}`) is copied verbatim.

use std::fmt::Display;

const TOKEN: &str = "{}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Arg(usize),
}

/// A template whose `{}` tokens have been bound to parameter indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> IndexedTemplate<'a> {
    /// Bind at most `arity` tokens of `template`.
    pub fn parse(template: &'a str, arity: usize) -> Self {
        let mut segments = Vec::new();
        let mut rest = template;
        let mut index = 0;

        while index < arity {
            let Some(pos) = rest.find(TOKEN) else {
                break;
            };
            if pos > 0 {
                segments.push(Segment::Literal(&rest[..pos]));
            }
            segments.push(Segment::Arg(index));
            index += 1;
            rest = &rest[pos + TOKEN.len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Self { segments }
    }

    /// Number of bound tokens.
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Arg(_)))
            .count()
    }

    pub fn render(&self, params: &[&dyn Display]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg(i) => match params.get(*i) {
                    Some(param) => out.push_str(&param.to_string()),
                    None => out.push_str(TOKEN),
                },
            }
        }
        out
    }
}

/// Substitute `params` into the `{}` tokens of `template`.
pub fn format_message(template: &str, params: &[&dyn Display]) -> String {
    IndexedTemplate::parse(template, params.len()).render(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_tokens_in_order() {
        let t = IndexedTemplate::parse("a {} b {} c", 2);
        assert_eq!(
            t.segments,
            vec![
                Segment::Literal("a "),
                Segment::Arg(0),
                Segment::Literal(" b "),
                Segment::Arg(1),
                Segment::Literal(" c"),
            ]
        );
    }

    #[test]
    fn stops_binding_when_params_run_out() {
        let t = IndexedTemplate::parse("{} {} {}", 1);
        assert_eq!(t.arity(), 1);
        assert_eq!(
            t.segments,
            vec![Segment::Arg(0), Segment::Literal(" {} {}")]
        );
    }

    #[test]
    fn renders_bound_params_and_keeps_unbound_tokens() {
        let t = IndexedTemplate::parse("{} of {} ({})", 2);
        assert_eq!(t.render(&[&3, &"five"]), "3 of five ({})");
    }

    #[test]
    fn empty_template() {
        let t = IndexedTemplate::parse("", 3);
        assert_eq!(t.arity(), 0);
        assert_eq!(t.render(&[&1]), "");
    }
}
