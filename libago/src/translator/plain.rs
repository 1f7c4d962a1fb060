//! Plain parameterized translator.
//!
//! Messages carry their plural forms inline, in the ICU `plural` style:
//!
//! ```text
//! {count, plural, =0 {just now} one {# day ago} other {# days ago}}
//! ```
//!
//! An exact `=N` branch wins, then the branch named after the CLDR plural
//! category of the count in the message locale (`one`, `few`, `many`, ...),
//! then `other`.
//! `#` inside the chosen branch stands for the count. Placeholders are
//! substituted afterwards, both as `%name%` and as `{name}`.

use super::plural::{ChainRules, PluralRule};
use super::{MessageCatalog, Params, Translator};
use crate::error::Result;

/// [`Translator`] expanding inline plural blocks.
#[derive(Debug, Clone)]
pub struct PlainTranslator {
    catalog: MessageCatalog,
    rules: ChainRules,
    strict: bool,
}

impl PlainTranslator {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            rules: ChainRules::for_catalog(&catalog),
            catalog,
            strict: false,
        }
    }

    /// Fail with `MissingMessage` instead of echoing unknown keys.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

impl Translator for PlainTranslator {
    fn render_plural(
        &self,
        key: &str,
        count: u32,
        params: &Params,
        domain: &str,
    ) -> Result<String> {
        let (message, locale) = self.catalog.resolve(domain, key, self.strict)?;
        let expanded = expand_plural(message, count, self.rules.get(locale));
        Ok(substitute(&expanded, params))
    }

    fn render(&self, key: &str, params: &Params, domain: &str) -> Result<String> {
        let (message, _) = self.catalog.resolve(domain, key, self.strict)?;
        Ok(substitute(message, params))
    }

    fn locale(&self) -> &str {
        self.catalog.locale()
    }
}

fn substitute(message: &str, params: &Params) -> String {
    params.iter().fold(message.to_string(), |acc, (name, value)| {
        let bare = name.trim_matches('%');
        acc.replace(name, value)
            .replace(&format!("{{{bare}}}"), value)
    })
}

/// Replaces every `{arg, plural, ...}` block of `message` with the branch
/// selected by `count`. Other braces are left alone.
pub(crate) fn expand_plural(message: &str, count: u32, rule: &PluralRule) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(start) = rest.find('{') {
        let Some(len) = block_len(&rest[start..]) else {
            break;
        };
        let block = &rest[start..start + len];
        out.push_str(&rest[..start]);
        match select_branch(&block[1..len - 1], count, rule) {
            Some(text) => out.push_str(&text),
            None => out.push_str(block),
        }
        rest = &rest[start + len..];
    }

    out.push_str(rest);
    out
}

/// Byte length of the balanced `{...}` block at the start of `s`.
fn block_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn select_branch(inner: &str, count: u32, rule: &PluralRule) -> Option<String> {
    let mut header = inner.splitn(3, ',');
    let _argument = header.next()?;
    if header.next()?.trim() != "plural" {
        return None;
    }
    let branches = parse_branches(header.next()?)?;

    let exact = format!("={count}");
    let chosen = branches
        .iter()
        .find(|(selector, _)| *selector == exact)
        .or_else(|| {
            let category = rule.category(i64::from(count));
            branches.iter().find(|(selector, _)| *selector == category)
        })
        .or_else(|| branches.iter().find(|(selector, _)| *selector == "other"))?;

    Some(chosen.1.replace('#', &count.to_string()))
}

fn parse_branches(s: &str) -> Option<Vec<(&str, &str)>> {
    let mut branches = Vec::new();
    let mut rest = s.trim_start();

    while !rest.is_empty() {
        let open = rest.find('{')?;
        let selector = rest[..open].trim();
        let len = block_len(&rest[open..])?;
        branches.push((selector, &rest[open + 1..open + len - 1]));
        rest = rest[open + len..].trim_start();
    }

    Some(branches)
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
